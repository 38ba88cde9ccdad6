use crate::error::{Result, TouchstoneError};
use crate::touchstone::{TouchstoneDocument, WriteOptions};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static RE_FILE_EXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^s(\d+)p$").expect("Invalid regex!"));

/// Port count encoded in a `.sNp` extension
pub fn ports_from_path<P: AsRef<Path>>(path: P) -> Result<usize> {
    let path = path.as_ref();
    let nports = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| RE_FILE_EXT.captures(ext))
        .and_then(|caps| caps[1].parse::<usize>().ok())
        .filter(|&n| n > 0);
    nports.ok_or_else(|| TouchstoneError::UnknownPortCount(path.display().to_string()))
}

/// Read a `.sNp` file, taking the port count from its extension
pub fn read_touchstone<P: AsRef<Path>>(path: P) -> Result<TouchstoneDocument> {
    let nports = ports_from_path(&path)?;
    read_touchstone_with_ports(path, nports)
}

pub fn read_touchstone_with_ports<P: AsRef<Path>>(
    path: P,
    nports: usize,
) -> Result<TouchstoneDocument> {
    let content = fs::read_to_string(path.as_ref())?;
    TouchstoneDocument::read(&content, nports)
}

pub fn write_touchstone<P: AsRef<Path>>(path: P, doc: &TouchstoneDocument) -> Result<()> {
    write_touchstone_with(path, doc, &WriteOptions::default())
}

pub fn write_touchstone_with<P: AsRef<Path>>(
    path: P,
    doc: &TouchstoneDocument,
    opts: &WriteOptions,
) -> Result<()> {
    let path = path.as_ref();
    let text = doc.write_with(opts)?;

    if let (Ok(expected), Some(nports)) = (ports_from_path(path), doc.nports()) {
        if expected != nports {
            tracing::warn!(
                "Port count mismatch: extension suggests {} ports, document has {}",
                expected,
                nports
            );
        }
    }

    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::format::NumericFormat;
    use crate::parameter::RFParameter;
    use crate::scale::FrequencyUnit;
    use crate::util::{comp_c64, comp_vec_f64, ROUND_TRIP_MARGIN};
    use num::complex::c64;

    #[test]
    fn ports_from_extension() {
        assert_eq!(ports_from_path("./data/test.s1p").unwrap(), 1);
        assert_eq!(ports_from_path("amp.S2P").unwrap(), 2);
        assert_eq!(ports_from_path("/tmp/dir.v2/coupler.s12p").unwrap(), 12);
        for bad in ["noext", "file.txt", "file.s0p", "file.sp", "file.s2"] {
            assert!(matches!(
                ports_from_path(bad),
                Err(TouchstoneError::UnknownPortCount(_))
            ));
        }
    }

    #[test]
    fn read_touchstone_s1p() {
        let doc = read_touchstone("./data/test.s1p").unwrap();
        assert_eq!(doc.comments(), &[" Created with mwavepy."]);
        assert_eq!(doc.nports(), Some(1));
        assert_eq!(doc.parameter(), Some(RFParameter::S));
        assert_eq!(doc.format(), Some(NumericFormat::RI));
        assert_eq!(doc.npts(), 4);

        let freq = doc.frequency().unwrap();
        assert_eq!(freq.unit(), FrequencyUnit::GHz);
        comp_vec_f64(
            &[75.0, 75.175, 75.35, 75.525],
            freq.scaled().as_slice().unwrap(),
            ROUND_TRIP_MARGIN,
            "freq(test.s1p)",
        );
        comp_c64(
            &c64(0.45345337996, 0.891279996524),
            &doc.matrix().unwrap()[[0, 0, 0]],
            ROUND_TRIP_MARGIN,
            "net(test.s1p)",
            "(0,0,0)",
        );
    }

    #[test]
    fn read_touchstone_missing_file() {
        assert!(matches!(
            read_touchstone("./data/missing.s2p"),
            Err(TouchstoneError::Io(_))
        ));
    }

    #[test]
    fn write_then_read_file() {
        let doc = read_touchstone("./data/test.s2p").unwrap();
        let path = std::env::temp_dir().join(format!("touchstone_{}_copy.s2p", std::process::id()));
        write_touchstone(&path, &doc).unwrap();
        let copy = read_touchstone(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(copy.parameter(), doc.parameter());
        assert_eq!(copy.npts(), doc.npts());
        crate::util::comp_matrix(
            doc.matrix().unwrap(),
            copy.matrix().unwrap(),
            ROUND_TRIP_MARGIN,
            "write_then_read_file",
        );
    }
}
