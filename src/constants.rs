use crate::thread::Marker;

pub(crate) const BENCHMARK_MARKER: Marker =
    Marker::new("<!-- DO NOT REMOVE: pr-reporter benchmark comment marker -->");
pub(crate) const COVERAGE_MARKER: Marker =
    Marker::new("<!-- DO NOT REMOVE: pr-reporter coverage comment marker -->");
pub(crate) const LINT_MARKER: Marker =
    Marker::new("<!-- DO NOT REMOVE: pr-reporter lint comment marker -->");

/// Largest page the issues API will return. Only one page is ever fetched.
pub(crate) const PAGE_SIZE: u8 = 100;
/// GitHub rejects comment bodies longer than this (in characters).
pub(crate) const MAX_BODY_LEN: usize = 65536;

pub(crate) const COVERAGE_TOTAL_TOKEN: &str = "total:";
pub(crate) const COVERAGE_FALLBACK: &str = "N/A";
