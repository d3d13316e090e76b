use once_cell::sync::Lazy;

use super::{bank, RoleProfile};

/// Role-to-profile lookup with a deterministic matching order: exact key,
/// declared alias, bidirectional substring in declaration order, then the
/// default profile.
pub struct RoleCatalog {
    profiles: Vec<(String, RoleProfile)>,
    aliases: Vec<(String, String)>,
    default_key: String,
}

static STANDARD: Lazy<RoleCatalog> = Lazy::new(|| {
    RoleCatalog::new(
        vec![
            ("software engineer".to_string(), bank::software_engineer()),
            ("product manager".to_string(), bank::product_manager()),
            ("data scientist".to_string(), bank::data_scientist()),
            ("ux designer".to_string(), bank::ux_designer()),
            ("marketing manager".to_string(), bank::marketing_manager()),
        ],
        vec![
            ("swe".to_string(), "software engineer".to_string()),
            ("developer".to_string(), "software engineer".to_string()),
            ("programmer".to_string(), "software engineer".to_string()),
            ("pm".to_string(), "product manager".to_string()),
            ("data analyst".to_string(), "data scientist".to_string()),
            ("product designer".to_string(), "ux designer".to_string()),
        ],
        "software engineer".to_string(),
    )
});

impl RoleCatalog {
    pub fn new(
        profiles: Vec<(String, RoleProfile)>,
        aliases: Vec<(String, String)>,
        default_key: String,
    ) -> Self {
        Self {
            profiles,
            aliases,
            default_key,
        }
    }

    /// The built-in catalog covering the five supported role families.
    pub fn standard() -> &'static RoleCatalog {
        &STANDARD
    }

    fn normalize(role: &str) -> String {
        role.trim().to_lowercase()
    }

    fn profile_for_key(&self, key: &str) -> Option<&RoleProfile> {
        self.profiles
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, profile)| profile)
    }

    /// Resolve a free-form job title to the closest known profile.
    ///
    /// Lookups never fail: anything unmatched lands on the default profile.
    pub fn resolve(&self, role: &str) -> &RoleProfile {
        let normalized = Self::normalize(role);

        if let Some(profile) = self.profile_for_key(&normalized) {
            return profile;
        }

        if let Some((_, target)) = self
            .aliases
            .iter()
            .find(|(alias, _)| alias == &normalized)
        {
            if let Some(profile) = self.profile_for_key(target) {
                return profile;
            }
        }

        if !normalized.is_empty() {
            for (key, profile) in &self.profiles {
                if normalized.contains(key.as_str()) || key.contains(&normalized) {
                    return profile;
                }
            }
        }

        self.profile_for_key(&self.default_key)
            .unwrap_or(&self.profiles[0].1)
    }
}
