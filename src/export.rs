use std::io;
use std::path::Path;

use anyhow::Context;
use serial_code::SerialCode;

/// Column header of the exported sheet.
pub const CSV_HEADER: &str = "serial";

/// Write codes to a CSV file, one per row under a `serial` header.
pub fn write_csv(path: &Path, codes: &[SerialCode]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_records(&mut writer, codes)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("Saved {} serial codes to {}", codes.len(), path.display());
    Ok(())
}

fn write_records<W: io::Write>(writer: &mut csv::Writer<W>, codes: &[SerialCode]) -> csv::Result<()> {
    writer.write_record([CSV_HEADER])?;
    for code in codes {
        writer.write_record([code.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_records() {
        let codes = vec![
            "ABCD-EFGH-IJKL-MNOP-9K3T".parse::<SerialCode>().unwrap(),
            "0000-0000-0000-0000-GKX2".parse::<SerialCode>().unwrap(),
        ];
        let mut writer = csv::Writer::from_writer(Vec::new());
        write_records(&mut writer, &codes).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(
            out.lines().collect::<Vec<_>>(),
            vec!["serial", "ABCD-EFGH-IJKL-MNOP-9K3T", "0000-0000-0000-0000-GKX2"]
        );
    }

    #[test]
    fn test_write_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codes.csv");
        let codes = vec!["ABCD-EFGH-IJKL-MNOP-9K3T".parse::<SerialCode>().unwrap()];
        write_csv(&path, &codes).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().collect::<Vec<_>>(), vec!["serial", "ABCD-EFGH-IJKL-MNOP-9K3T"]);
    }

    #[test]
    fn test_write_csv_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("codes.csv");
        assert!(write_csv(&path, &[]).is_err());
    }
}
