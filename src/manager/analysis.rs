//! Advisory analysis of protocol configurations against the catalog.

use super::registry::AlpnManager;
use crate::catalog::{self, protocols::*};

/// Catalog facts about one protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolDetail {
    /// Protocol name, lossily decoded.
    pub protocol: String,
    /// Present in the catalog.
    pub supported: bool,
    /// Catalogued as deprecated.
    pub deprecated: bool,
    /// Catalog description, or "Unknown protocol".
    pub description: &'static str,
}

/// Summary of a protocol list.
///
/// Counts cover every input entry; `details` holds one row per distinct
/// protocol in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtocolAnalysis {
    /// Number of entries analyzed.
    pub total: usize,
    /// Entries found in the catalog.
    pub supported: usize,
    /// Catalogued entries marked deprecated.
    pub deprecated: usize,
    /// Entries not in the catalog.
    pub unknown: usize,
    /// Per-protocol details.
    pub details: Vec<ProtocolDetail>,
}

impl ProtocolAnalysis {
    /// Details for one protocol, if it was analyzed.
    pub fn detail(&self, protocol: &str) -> Option<&ProtocolDetail> {
        self.details.iter().find(|d| d.protocol == protocol)
    }
}

/// Outcome of [`AlpnManager::validate_configuration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationReport {
    /// False only when the configuration cannot be used at all.
    pub valid: bool,
    /// Problems found.
    pub issues: Vec<String>,
    /// Suggested improvements.
    pub recommendations: Vec<String>,
}

impl AlpnManager {
    /// Compare a protocol list against the catalog.
    pub fn analyze_protocols<P: AsRef<[u8]>>(&self, protocols: &[P]) -> ProtocolAnalysis {
        let mut analysis = ProtocolAnalysis {
            total: protocols.len(),
            ..Default::default()
        };

        for protocol in protocols {
            let protocol = protocol.as_ref();
            let info = catalog::lookup(protocol);
            let supported = info.is_some();
            let deprecated = info.is_some_and(|i| i.deprecated);

            if supported {
                analysis.supported += 1;
                if deprecated {
                    analysis.deprecated += 1;
                }
            } else {
                analysis.unknown += 1;
            }

            let name = String::from_utf8_lossy(protocol);
            if analysis.detail(&name).is_none() {
                analysis.details.push(ProtocolDetail {
                    protocol: name.into_owned(),
                    supported,
                    deprecated,
                    description: catalog::description(protocol),
                });
            }
        }

        analysis
    }

    /// Check a protocol list for unknown or deprecated entries and missing
    /// modern or fallback protocols.
    pub fn validate_configuration<P: AsRef<[u8]>>(&self, protocols: &[P]) -> ConfigurationReport {
        let mut report = ConfigurationReport {
            valid: true,
            issues: Vec::new(),
            recommendations: Vec::new(),
        };

        if protocols.is_empty() {
            report.valid = false;
            report.issue("No protocols specified".to_owned());
            return report;
        }

        let analysis = self.analyze_protocols(protocols);
        if analysis.unknown > 0 {
            report.issue(format!("{} unknown protocol(s) found", analysis.unknown));
        }
        if analysis.deprecated > 0 {
            let count = analysis.deprecated;
            report.issue(format!("{count} deprecated protocol(s) found"));
            report.recommend("Consider removing deprecated protocols");
        }

        let has = |name: &str| protocols.iter().any(|p| p.as_ref() == name.as_bytes());
        if !has(HTTP_2) && !has(HTTP_3) {
            report.recommend("Consider adding HTTP/2 or HTTP/3 for better performance");
        } else if !has(HTTP_1_1) {
            report.recommend("Consider adding HTTP/1.1 as fallback protocol");
        }

        report
    }
}

impl ConfigurationReport {
    fn issue(&mut self, issue: String) {
        self.issues.push(issue);
    }

    fn recommend(&mut self, recommendation: &str) {
        self.recommendations.push(recommendation.to_owned());
    }
}
