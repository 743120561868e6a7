use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::debug;

use pilonkit_core::utils::get_dynamic_reader;

use crate::errors::CombineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestEntry {
    Indels,
    IlluminaCoverage,
    PacBioCoverage,
    Homopolymers,
    GcSkew,
}

impl ManifestEntry {
    pub fn name(&self) -> &'static str {
        match self {
            ManifestEntry::Indels => "Indels",
            ManifestEntry::IlluminaCoverage => "Illumina_coverage",
            ManifestEntry::PacBioCoverage => "PacBio_coverage",
            ManifestEntry::Homopolymers => "Homopolymers_file",
            ManifestEntry::GcSkew => "GCSkew_file",
        }
    }
}

impl FromStr for ManifestEntry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Indels" => Ok(ManifestEntry::Indels),
            "Illumina_coverage" => Ok(ManifestEntry::IlluminaCoverage),
            "PacBio_coverage" => Ok(ManifestEntry::PacBioCoverage),
            "Homopolymers_file" => Ok(ManifestEntry::Homopolymers),
            "GCSkew_file" => Ok(ManifestEntry::GcSkew),
            _ => Err(format!("Unknown manifest entry: {}", s)),
        }
    }
}

///
/// The list of input files for a combine run, one `kind <TAB> path` per line.
/// Columns may be aligned with extra tabs or spaces; everything after the
/// separator is the path:
///
/// ```text
/// Indels			pilon_common.txt
/// Illumina_coverage	illumina.wig
/// PacBio_coverage		pacbio.wig
/// Homopolymers_file	homopolymers.txt
/// GCSkew_file		gc_skew.txt
/// ```
///
/// The GC skew file is accepted and kept but never read.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub indels: PathBuf,
    pub illumina_coverage: PathBuf,
    pub pacbio_coverage: PathBuf,
    pub homopolymers: PathBuf,
    pub gc_skew: Option<PathBuf>,
}

impl Manifest {
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, CombineError> {
        let mut indels = None;
        let mut illumina_coverage = None;
        let mut pacbio_coverage = None;
        let mut homopolymers = None;
        let mut gc_skew = None;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = index + 1;
            let text = line.trim();
            if text.is_empty() {
                continue;
            }

            let (name, path) = text
                .split_once(char::is_whitespace)
                .unwrap_or((text, ""));
            let entry = name
                .parse::<ManifestEntry>()
                .map_err(|_| CombineError::UnknownManifestEntry {
                    line: line_no,
                    name: name.to_string(),
                })?;

            let path = match path.trim() {
                "" => {
                    return Err(CombineError::MalformedManifestLine {
                        line: line_no,
                        text: text.to_string(),
                    });
                }
                path => PathBuf::from(path),
            };

            match entry {
                ManifestEntry::Indels => indels = Some(path),
                ManifestEntry::IlluminaCoverage => illumina_coverage = Some(path),
                ManifestEntry::PacBioCoverage => pacbio_coverage = Some(path),
                ManifestEntry::Homopolymers => homopolymers = Some(path),
                ManifestEntry::GcSkew => gc_skew = Some(path),
            }
        }

        if let Some(gc_skew) = &gc_skew {
            debug!("GC skew file listed but not used: {:?}", gc_skew);
        }

        Ok(Manifest {
            indels: required(indels, ManifestEntry::Indels)?,
            illumina_coverage: required(illumina_coverage, ManifestEntry::IlluminaCoverage)?,
            pacbio_coverage: required(pacbio_coverage, ManifestEntry::PacBioCoverage)?,
            homopolymers: required(homopolymers, ManifestEntry::Homopolymers)?,
            gc_skew,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, CombineError> {
        let reader = get_dynamic_reader(path)?;
        Manifest::from_reader(reader)
    }
}

fn required(path: Option<PathBuf>, entry: ManifestEntry) -> Result<PathBuf, CombineError> {
    path.ok_or_else(|| CombineError::MissingManifestEntry(entry.name().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Cursor;

    #[rstest]
    fn test_full_manifest() {
        let text = "Indels\tindels.txt\n\
                    Illumina_coverage\tilu.wig\n\
                    PacBio_coverage\tpb.wig\n\
                    Homopolymers_file\thom.txt\n\
                    GCSkew_file\tgc.txt\n";
        let manifest = Manifest::from_reader(Cursor::new(text)).unwrap();
        assert_eq!(
            manifest,
            Manifest {
                indels: PathBuf::from("indels.txt"),
                illumina_coverage: PathBuf::from("ilu.wig"),
                pacbio_coverage: PathBuf::from("pb.wig"),
                homopolymers: PathBuf::from("hom.txt"),
                gc_skew: Some(PathBuf::from("gc.txt")),
            }
        );
    }

    #[rstest]
    fn test_gc_skew_is_optional() {
        let text = "Indels\tindels.txt\n\
                    Illumina_coverage\tilu.wig\n\
                    \n\
                    PacBio_coverage\tpb.wig\n\
                    Homopolymers_file\thom.txt\n";
        let manifest = Manifest::from_reader(Cursor::new(text)).unwrap();
        assert_eq!(manifest.gc_skew, None);
    }

    #[rstest]
    #[case("Indels\t\t\tindels.txt\nIllumina_coverage\tilu.wig\nPacBio_coverage\t\tpb.wig\nHomopolymers_file\thom.txt\n")]
    #[case("Indels              indels.txt\nIllumina_coverage   ilu.wig\nPacBio_coverage     pb.wig\nHomopolymers_file   hom.txt\n")]
    fn test_aligned_manifest(#[case] text: &str) {
        let manifest = Manifest::from_reader(Cursor::new(text)).unwrap();
        assert_eq!(manifest.indels, PathBuf::from("indels.txt"));
        assert_eq!(manifest.pacbio_coverage, PathBuf::from("pb.wig"));
        assert_eq!(manifest.homopolymers, PathBuf::from("hom.txt"));
    }

    #[rstest]
    fn test_path_may_contain_spaces() {
        let text = "Indels\tmy run/indels.txt\n\
                    Illumina_coverage\tilu.wig\n\
                    PacBio_coverage\tpb.wig\n\
                    Homopolymers_file\thom.txt\n";
        let manifest = Manifest::from_reader(Cursor::new(text)).unwrap();
        assert_eq!(manifest.indels, PathBuf::from("my run/indels.txt"));
    }

    #[rstest]
    fn test_unknown_entry() {
        let text = "Indels\tindels.txt\nCpG_file\tcpg.txt\n";
        assert!(matches!(
            Manifest::from_reader(Cursor::new(text)),
            Err(CombineError::UnknownManifestEntry { line: 2, .. })
        ));
    }

    #[rstest]
    fn test_missing_required_entry() {
        let text = "Indels\tindels.txt\nIllumina_coverage\tilu.wig\n";
        match Manifest::from_reader(Cursor::new(text)) {
            Err(CombineError::MissingManifestEntry(name)) => assert_eq!(name, "PacBio_coverage"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[rstest]
    fn test_entry_without_path() {
        let text = "Indels\n";
        assert!(matches!(
            Manifest::from_reader(Cursor::new(text)),
            Err(CombineError::MalformedManifestLine { line: 1, .. })
        ));
    }
}
