use crate::core::types::Verdict;
use crate::core::url::ParsedUrl;

pub mod typosquat;

pub trait Detector {
    fn name(&self) -> &'static str;
    fn assess(&self, url: &ParsedUrl) -> Verdict;

    fn is_scam(&self, url: &ParsedUrl) -> bool {
        self.assess(url).scam
    }
}
