//! Code generation configuration

/// Code generation options
#[derive(Debug, Clone)]
pub struct CodegenConfig {
    /// Maximum characters of a description embedded in schema builders (default: 200)
    pub description_limit: usize,

    /// Emit doc comments on generated structs and fields
    pub doc_comments: bool,

    /// Crate path the generated module imports shared types from
    pub core_crate: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            description_limit: 200,
            doc_comments: true,
            core_crate: "cfn_catalog_core".to_string(),
        }
    }
}

impl CodegenConfig {
    /// Collapse whitespace and cut a description to `description_limit` characters
    pub fn truncate_description(&self, desc: &str) -> String {
        let collapsed = desc.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.chars().count() > self.description_limit {
            let cut: String = collapsed.chars().take(self.description_limit).collect();
            format!("{}...", cut.trim_end())
        } else {
            collapsed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodegenConfig::default();
        assert_eq!(config.description_limit, 200);
        assert!(config.doc_comments);
        assert_eq!(config.core_crate, "cfn_catalog_core");
    }

    #[test]
    fn test_truncate_collapses_whitespace() {
        let config = CodegenConfig::default();
        assert_eq!(config.truncate_description("a\n  b\tc"), "a b c");
    }

    #[test]
    fn test_truncate_is_char_safe() {
        let config = CodegenConfig {
            description_limit: 3,
            ..Default::default()
        };
        assert_eq!(config.truncate_description("ééééé"), "ééé...");
        assert_eq!(config.truncate_description("abc"), "abc");
    }
}
