use crate::domain::entities::Complaint;
use crate::domain::value_objects::ComplaintStatus;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintSort {
    /// Store order: creation time, newest first.
    #[default]
    Newest,
    TitleAsc,
    TitleDesc,
}

/// Client-side narrowing of an already fetched complaint list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComplaintQuery {
    /// `None` means "All".
    #[serde(default)]
    pub status: Option<ComplaintStatus>,
    /// Case-insensitive substring of the title.
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort: ComplaintSort,
}

impl ComplaintQuery {
    pub fn matches(&self, complaint: &Complaint) -> bool {
        let status_ok = self.status.map_or(true, |s| complaint.status() == s);
        let search_ok = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => complaint
                .title()
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        };
        status_ok && search_ok
    }

    /// Filters and sorts; an empty result is just an empty vector.
    pub fn apply(&self, complaints: Vec<Complaint>) -> Vec<Complaint> {
        let mut out: Vec<Complaint> = complaints.into_iter().filter(|c| self.matches(c)).collect();
        match self.sort {
            ComplaintSort::Newest => out.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
            ComplaintSort::TitleAsc => out.sort_by_key(|c| c.title().to_lowercase()),
            ComplaintSort::TitleDesc => {
                out.sort_by(|a, b| b.title().to_lowercase().cmp(&a.title().to_lowercase()))
            }
        }
        out
    }
}
