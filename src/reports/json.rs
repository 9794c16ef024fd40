use super::common;
use crate::Result;
use crate::audits::{AuditOutcome, AuditRecord};
use core::fmt::Write;
use serde_json::json;

#[expect(unused_results, reason = "Map::insert intentionally overwrites values")]
pub fn generate<W: Write>(records: &[AuditRecord], writer: &mut W) -> Result<()> {
    let mut audits = serde_json::Map::new();

    for record in records {
        let meta = &record.meta;
        let mut audit_obj = serde_json::Map::new();
        audit_obj.insert("id".to_string(), json!(meta.id));
        audit_obj.insert("title".to_string(), json!(meta.title));
        audit_obj.insert("description".to_string(), json!(meta.description));
        audit_obj.insert(
            "scoreDisplayMode".to_string(),
            json!(common::display_mode_for(meta.scoring_mode, &record.outcome)),
        );

        match &record.outcome {
            AuditOutcome::Scored(result) => {
                audit_obj.insert("score".to_string(), json!(result.score));
                audit_obj.insert("numericValue".to_string(), json!(result.numeric_value));
                audit_obj.insert("displayValue".to_string(), json!(result.display_value));
                audit_obj.insert("explanation".to_string(), json!(result.explanation));
                audit_obj.insert("errorMessage".to_string(), serde_json::Value::Null);
            }
            AuditOutcome::Failed(error) => {
                audit_obj.insert("score".to_string(), serde_json::Value::Null);
                audit_obj.insert("numericValue".to_string(), serde_json::Value::Null);
                audit_obj.insert("displayValue".to_string(), serde_json::Value::Null);
                audit_obj.insert("explanation".to_string(), serde_json::Value::Null);
                audit_obj.insert("errorMessage".to_string(), json!(error.to_string()));
            }
        }

        audits.insert(meta.id.to_string(), json!(audit_obj));
    }

    let output = json!({
        "audits": audits
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::ArtifactKind;
    use crate::audits::{AuditError, AuditMeta, AuditResult};
    use crate::scoring::{ScoreCalibration, ScoringMode};
    use ohno::app_err;
    use std::sync::Arc;

    fn meta() -> AuditMeta {
        AuditMeta {
            id: "cumulative-layout-shift",
            title: "Cumulative Layout Shift".to_string(),
            description: "Measures visual stability.".to_string(),
            scoring_mode: ScoringMode::Numeric,
            required_artifacts: &[ArtifactKind::Traces],
            default_calibration: Some(ScoreCalibration::new(0.1, 0.5).unwrap()),
        }
    }

    fn render(records: &[AuditRecord]) -> serde_json::Value {
        let mut output = String::new();
        generate(records, &mut output).unwrap();
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn test_generate_empty() {
        assert_eq!(render(&[]), json!({ "audits": {} }));
    }

    #[test]
    fn test_generate_scored() {
        let record = AuditRecord {
            meta: meta(),
            outcome: AuditOutcome::Scored(AuditResult::new(
                Some(0.99),
                Some("late shifts ignored".to_string()),
                0.05,
                "0.05".to_string(),
            )),
        };

        assert_eq!(
            render(&[record]),
            json!({
                "audits": {
                    "cumulative-layout-shift": {
                        "id": "cumulative-layout-shift",
                        "title": "Cumulative Layout Shift",
                        "description": "Measures visual stability.",
                        "scoreDisplayMode": "numeric",
                        "score": 0.99,
                        "numericValue": 0.05,
                        "displayValue": "0.05",
                        "explanation": "late shifts ignored",
                        "errorMessage": null,
                    }
                }
            })
        );
    }

    #[test]
    fn test_generate_failed() {
        let record = AuditRecord {
            meta: meta(),
            outcome: AuditOutcome::Failed(AuditError::Metric {
                audit: "cumulative-layout-shift",
                source: Arc::new(app_err!("trace missing required event")),
            }),
        };

        let json = render(&[record]);
        let audit = &json["audits"]["cumulative-layout-shift"];

        assert_eq!(audit["scoreDisplayMode"], "error");
        assert!(audit["score"].is_null());
        assert!(audit["numericValue"].is_null());
        assert!(audit["errorMessage"].as_str().unwrap().contains("trace missing required event"));
    }
}
