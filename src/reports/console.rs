use super::common;
use crate::Result;
use crate::audits::{AuditMeta, AuditOutcome, AuditRecord};
use crate::scoring::Rating;
use core::fmt::Write;
use owo_colors::OwoColorize;

pub fn generate<W: Write>(records: &[AuditRecord], use_colors: bool, writer: &mut W) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }

        write_heading(writer, &record.meta.title, record.meta.id, use_colors)?;

        let rating = common::rating_for(&record.outcome);
        let rating_str = rating.to_string();
        let colored_rating = if use_colors {
            match rating {
                Rating::Pass => rating_str.green().bold().to_string(),
                Rating::Average => rating_str.yellow().bold().to_string(),
                Rating::Fail | Rating::Error => rating_str.red().bold().to_string(),
            }
        } else {
            rating_str
        };

        match &record.outcome {
            AuditOutcome::Scored(result) => {
                writeln!(writer, "  value : {}", result.display_value)?;
                writeln!(writer, "  score : {} ({colored_rating})", common::format_score(result.score))?;
                if let Some(explanation) = &result.explanation {
                    writeln!(writer, "  note  : {explanation}")?;
                }
            }
            AuditOutcome::Failed(error) => {
                writeln!(writer, "  score : {colored_rating}")?;
                writeln!(writer, "  cause : {error}")?;
            }
        }
    }

    Ok(())
}

/// Render the catalog of registered audits.
pub fn generate_audit_list<'a, W: Write>(metas: impl IntoIterator<Item = &'a AuditMeta>, use_colors: bool, writer: &mut W) -> Result<()> {
    for (index, meta) in metas.into_iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }

        write_heading(writer, &meta.title, meta.id, use_colors)?;
        writeln!(writer, "  mode        : {}", meta.scoring_mode)?;

        let required: Vec<_> = meta.required_artifacts.iter().map(ToString::to_string).collect();
        writeln!(writer, "  requires    : {}", required.join(", "))?;

        if let Some(calibration) = &meta.default_calibration {
            writeln!(
                writer,
                "  calibration : podr {}, median {}",
                calibration.podr(),
                calibration.median()
            )?;
        }

        writeln!(writer, "  {}", meta.description)?;
    }

    Ok(())
}

fn write_heading<W: Write>(writer: &mut W, title: &str, id: &str, use_colors: bool) -> Result<()> {
    if use_colors {
        writeln!(writer, "{} ({id})", title.bold())?;
    } else {
        writeln!(writer, "{title} ({id})")?;
    }

    Ok(())
}
