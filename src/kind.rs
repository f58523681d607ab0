use std::fmt;

/// The directory kinds an application can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirKind {
    UserData,
    SiteData,
    UserConfig,
    SiteConfig,
    UserCache,
    UserState,
    UserLog,
}

impl DirKind {
    /// Every kind, in a stable order
    pub const ALL: [DirKind; 7] = [
        DirKind::UserData,
        DirKind::SiteData,
        DirKind::UserConfig,
        DirKind::SiteConfig,
        DirKind::UserCache,
        DirKind::UserState,
        DirKind::UserLog,
    ];

    /// Short name used for the per-kind folder below a mock root
    pub fn slug(self) -> &'static str {
        match self {
            DirKind::UserData => "data",
            DirKind::SiteData => "site-data",
            DirKind::UserConfig => "config",
            DirKind::SiteConfig => "site-config",
            DirKind::UserCache => "cache",
            DirKind::UserState => "state",
            DirKind::UserLog => "log",
        }
    }

    /// XDG environment variable that overrides the base directory.
    ///
    /// `UserLog` has none: it lives below the state directory.
    pub fn xdg_var(self) -> Option<&'static str> {
        match self {
            DirKind::UserData => Some("XDG_DATA_HOME"),
            DirKind::SiteData => Some("XDG_DATA_DIRS"),
            DirKind::UserConfig => Some("XDG_CONFIG_HOME"),
            DirKind::SiteConfig => Some("XDG_CONFIG_DIRS"),
            DirKind::UserCache => Some("XDG_CACHE_HOME"),
            DirKind::UserState => Some("XDG_STATE_HOME"),
            DirKind::UserLog => None,
        }
    }

    /// Whether the XDG variable is a colon-separated search list
    pub fn is_site(self) -> bool {
        matches!(self, DirKind::SiteData | DirKind::SiteConfig)
    }
}

impl fmt::Display for DirKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DirKind::UserData => "user data",
            DirKind::SiteData => "site data",
            DirKind::UserConfig => "user config",
            DirKind::SiteConfig => "site config",
            DirKind::UserCache => "user cache",
            DirKind::UserState => "user state",
            DirKind::UserLog => "user log",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_are_unique() {
        let slugs: HashSet<_> = DirKind::ALL.iter().map(|k| k.slug()).collect();
        assert_eq!(slugs.len(), DirKind::ALL.len());
    }

    #[test]
    fn test_only_site_kinds_use_search_lists() {
        let site: Vec<_> = DirKind::ALL.iter().filter(|k| k.is_site()).collect();
        assert_eq!(site, vec![&DirKind::SiteData, &DirKind::SiteConfig]);
        assert_eq!(DirKind::SiteData.xdg_var(), Some("XDG_DATA_DIRS"));
    }

    #[test]
    fn test_log_has_no_xdg_var() {
        assert!(DirKind::UserLog.xdg_var().is_none());
        assert_eq!(DirKind::UserCache.to_string(), "user cache");
    }
}
