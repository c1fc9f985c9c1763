pub mod catalog;
pub mod selector;

pub use catalog::{entries, entry, lookup, PanelEntry, PanelId};
pub use selector::{PanelSelection, PanelSelector};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PanelError {
    #[error("unknown panel: {0}")]
    UnknownPanel(String),
}

#[cfg(test)]
mod tests {
    use crate::{PanelError, PanelId, PanelSelector};

    #[test]
    fn unknown_panel_error_names_the_key() {
        let err = PanelError::UnknownPanel("audit".to_owned());

        assert_eq!(err.to_string(), "unknown panel: audit");
    }

    #[test]
    fn panel_ids_serialize_as_lowercase_keys() {
        let json = serde_json::to_string(&PanelId::Enhancements).unwrap();

        assert_eq!(json, "\"enhancements\"");
    }

    #[test]
    fn open_panel_exposes_catalog_content() {
        let mut selector = PanelSelector::new();

        let entry = selector.select(PanelId::Integration);

        assert_eq!(entry.title, "8. Integration Methods");
        assert!(entry.body.contains("1inch"));
    }
}
