use std::io::Write;

use serde::Serialize;

use pilonkit_core::models::Base;

use crate::errors::CombineError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BaseCounts {
    pub a: u64,
    pub t: u64,
    pub c: u64,
    pub g: u64,
}

impl BaseCounts {
    pub fn add(&mut self, base: Base) {
        match base {
            Base::A => self.a += 1,
            Base::T => self.t += 1,
            Base::C => self.c += 1,
            Base::G => self.g += 1,
        }
    }

    pub fn get(&self, base: Base) -> u64 {
        match base {
            Base::A => self.a,
            Base::T => self.t,
            Base::C => self.c,
            Base::G => self.g,
        }
    }

    pub fn total(&self) -> u64 {
        self.a + self.t + self.c + self.g
    }
}

///
/// Running count of indels that land on the first base of a homopolymer.
/// Owned by the caller of the merge loop and fed one row at a time.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HomopolymerTally {
    pub per_base: BaseCounts,
}

impl HomopolymerTally {
    pub fn record(&mut self, base: Base) {
        self.per_base.add(base);
    }

    pub fn indels_in_homopolymers(&self) -> u64 {
        self.per_base.total()
    }
}

/// `count / total * 100`, refusing to divide by zero.
pub fn percentage(count: u64, total: u64, what: &str) -> Result<f64, CombineError> {
    if total == 0 {
        return Err(CombineError::InsufficientData(format!(
            "can't compute {}: there are no {}",
            what, what
        )));
    }
    Ok(count as f64 / total as f64 * 100.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseStatistics {
    pub base: String,
    pub indels: u64,
    pub percent_affected: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombineStats {
    pub total_homopolymers: u64,
    pub total_indels: u64,
    pub indels_in_homopolymers: u64,
    pub percent_homopolymers_affected: f64,
    pub per_base: Vec<BaseStatistics>,
}

impl CombineStats {
    ///
    /// Build the summary from homopolymer totals and the merge-loop tally.
    /// Each per-base percentage is relative to the runs of that same base.
    ///
    pub fn compute(
        base_totals: &BaseCounts,
        total_indels: u64,
        tally: &HomopolymerTally,
    ) -> Result<Self, CombineError> {
        let total_homopolymers = base_totals.total();
        let indels_in_homopolymers = tally.indels_in_homopolymers();
        let percent_homopolymers_affected =
            percentage(indels_in_homopolymers, total_homopolymers, "homopolymers")?;

        let per_base = Base::REPORT_ORDER
            .iter()
            .map(|&base| {
                let indels = tally.per_base.get(base);
                let what = format!("{} homopolymers", base);
                Ok(BaseStatistics {
                    base: base.to_string(),
                    indels,
                    percent_affected: percentage(indels, base_totals.get(base), &what)?,
                })
            })
            .collect::<Result<Vec<_>, CombineError>>()?;

        Ok(CombineStats {
            total_homopolymers,
            total_indels,
            indels_in_homopolymers,
            percent_homopolymers_affected,
            per_base,
        })
    }

    /// The twelve (label, value) rows of the statistics file, in order.
    pub fn rows(&self) -> Vec<(String, String)> {
        let mut rows = vec![
            (
                "Total Homopolymers".to_string(),
                self.total_homopolymers.to_string(),
            ),
            ("Total Indels".to_string(), self.total_indels.to_string()),
            (
                "Indels in Homopolymers".to_string(),
                self.indels_in_homopolymers.to_string(),
            ),
            (
                "% of Homopolymers Affected".to_string(),
                format!("{:?}", self.percent_homopolymers_affected),
            ),
        ];

        for stat in &self.per_base {
            rows.push((
                format!("{} homopolymers with indel", stat.base),
                stat.indels.to_string(),
            ));
            rows.push((
                format!("% of {} Homopolymers Affected", stat.base),
                format!("{:?}", stat.percent_affected),
            ));
        }

        rows
    }

    pub fn write_tsv<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for (label, value) in self.rows() {
            writeln!(writer, "{}\t{}", label, value)?;
        }
        Ok(())
    }
}
