pub mod remediation;
pub mod report;

pub use remediation::{NextStep, RemediationCatalog, NEXT_STEPS};
pub use report::{LeakReport, ProcessReport, Recommendation, ReportComposer, ReportError};
