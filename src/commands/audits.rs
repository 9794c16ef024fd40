use super::Host;
use super::common::{Common, GlobalArgs, Unmeasured};
use crate::Result;
use crate::reports::generate_audit_list;
use std::io::Write;
use std::sync::Arc;

pub fn list_audits<H: Host>(host: &mut H, global: &GlobalArgs) -> Result<()> {
    let common = Common::new(global)?;
    let registry = common.registry(Arc::new(Unmeasured))?;

    let mut output = String::new();
    generate_audit_list(registry.metas(), common.use_colors(), &mut output)?;
    let _ = write!(host.output(), "{output}");
    Ok(())
}
