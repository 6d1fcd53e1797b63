use crate::compatibility::domain::EnrichedDevice;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use anyhow::Context;
use std::io::Write;

/// Fixed column header of the compatibility report
pub const REPORT_HEADER: [&str; 5] = [
    "Agent ID",
    "Name",
    "Hardware Model",
    "Policy Name",
    "Latest Compatible OS",
];

/// CsvFormatter adapter for the comma-separated compatibility report
///
/// This adapter implements the ReportFormatter port. Fields are written
/// verbatim with standard CSV quoting; the unsupported sentinel renders as
/// the literal text `Unsupported`.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Writes the header and one row per device, in order, to `sink`
    ///
    /// # Errors
    /// Returns an error if any write to `sink` fails
    pub fn write_report<W: Write>(&self, devices: &[EnrichedDevice], sink: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(sink);

        writer
            .write_record(REPORT_HEADER)
            .context("writing headers")?;

        for device in devices {
            let latest = device.latest_compatible_os.to_string();
            writer
                .write_record([
                    device.agent_id.as_str(),
                    device.name.as_str(),
                    device.hardware_model.as_str(),
                    device.policy_name.as_str(),
                    latest.as_str(),
                ])
                .with_context(|| format!("writing record for {}", device.agent_id))?;
        }

        writer.flush().context("flushing CSV output")?;
        Ok(())
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvFormatter {
    fn format(&self, devices: &[EnrichedDevice]) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_report(devices, &mut buffer)?;
        String::from_utf8(buffer).context("CSV output is not valid UTF-8")
    }
}
