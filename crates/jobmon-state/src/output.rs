//! Result line rendering.

use jobmon_core::ResolvedSet;
use std::io::{self, Write};

/// Write one `<job_id>_<job_name>,<STATUS>,<detail>` line per job, in
/// insertion order, then flush the sink.
pub fn write_results<W: Write>(results: &ResolvedSet, out: &mut W) -> io::Result<()> {
    for (job_id, result) in results.iter() {
        writeln!(
            out,
            "{}_{},{},{}",
            job_id, result.job_name, result.status, result.detail
        )?;
    }
    out.flush()
}
