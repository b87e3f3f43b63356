//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use mickeys_cache::{Cache, SessionId};
use mickeys_commerce::cart::CartSessions;
use mickeys_commerce::pricing::PricingEngine;
use mickeys_data::{DryRunSubmitter, FetchClient, FormSubmitter, GalleryClient, ScriptEndpoint};

use crate::config::ShopConfig;
use crate::output::Output;

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["mickeys.toml", ".mickeys.toml", "mickeys.json"];

/// Session directory used when the config names none.
const DEFAULT_STORE_DIR: &str = ".mickeys/sessions";

/// Cache key remembering the generated session id between runs.
const CURRENT_SESSION_KEY: &str = "cli:current_session";

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ShopConfig,
    /// Where the config came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (ShopConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd) {
                Some(path) => {
                    let config = ShopConfig::load(&path.to_string_lossy())?;
                    (config, Some(path))
                }
                None => (ShopConfig::default(), None),
            }
        };

        if let Some(ref path) = config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Directory relative paths in the config are resolved against.
    pub fn base_dir(&self) -> PathBuf {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| self.resolve_path(&p.to_string_lossy()))
            .unwrap_or_else(|| self.cwd.clone())
    }

    /// Directory holding session files.
    pub fn store_dir(&self) -> PathBuf {
        let dir = self
            .config
            .session
            .store_dir
            .as_deref()
            .unwrap_or(DEFAULT_STORE_DIR);
        let path = PathBuf::from(dir);
        if path.is_absolute() {
            path
        } else {
            self.base_dir().join(path)
        }
    }

    /// Pricing engine built from the config.
    pub fn engine(&self) -> Result<PricingEngine> {
        self.config.to_engine()
    }

    /// File-backed cache under the store directory.
    pub fn cache(&self) -> Result<Cache> {
        let dir = self.store_dir();
        Cache::open_dir(&dir)
            .with_context(|| format!("Failed to open session store: {}", dir.display()))
    }

    /// Cart sessions plus the id of the current session.
    pub fn cart_sessions(&self) -> Result<(CartSessions, SessionId)> {
        let cache = self.cache()?;
        let id = self.session_id(&cache)?;
        self.output.debug(&format!("Session: {}", id));
        Ok((CartSessions::new(cache, self.engine()?), id))
    }

    /// The configured session id, or the one remembered from an earlier run.
    /// A new id is generated and remembered when neither exists.
    pub fn session_id(&self, cache: &Cache) -> Result<SessionId> {
        if let Some(ref id) = self.config.session.id {
            return Ok(SessionId::new(id.clone()));
        }

        if let Some(id) = cache.get::<String>(CURRENT_SESSION_KEY)? {
            return Ok(SessionId::new(id));
        }

        let id = SessionId::generate();
        cache.set(CURRENT_SESSION_KEY, &id.as_str())?;
        Ok(id)
    }

    /// Drop the remembered session id so the next run starts a new session.
    pub fn forget_session(&self, cache: &Cache) -> Result<()> {
        cache.delete(CURRENT_SESSION_KEY)?;
        Ok(())
    }

    /// HTTP client for outbound requests.
    pub fn http(&self) -> Result<FetchClient> {
        FetchClient::new().context("Failed to create HTTP client")
    }

    /// Submitter for the form endpoint. A dry run only renders the URL.
    pub fn submitter(&self, dry_run: bool) -> Result<Box<dyn FormSubmitter>> {
        let url = &self.config.endpoints.script_url;
        if dry_run {
            return Ok(Box::new(DryRunSubmitter::new(url)?));
        }
        Ok(Box::new(ScriptEndpoint::new(self.http()?, url)?))
    }

    pub fn gallery_client(&self) -> Result<GalleryClient> {
        Ok(GalleryClient::new(
            self.http()?,
            self.config.endpoints.gallery_url.clone(),
        ))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find a config file in the directory tree.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_in(dir: &Path, config: ShopConfig, config_path: Option<PathBuf>) -> Context {
        Context {
            config,
            config_path,
            output: Output::new(false, true),
            cwd: dir.to_path_buf(),
        }
    }

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".mickeys.toml"), "").unwrap();

        let found = find_config(&nested).unwrap();
        assert_eq!(found, dir.path().join(".mickeys.toml"));
    }

    #[test]
    fn test_find_config_prefers_first_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("mickeys.json"), "{}").unwrap();
        std::fs::write(dir.path().join("mickeys.toml"), "").unwrap();

        assert_eq!(find_config(dir.path()).unwrap(), dir.path().join("mickeys.toml"));
    }

    #[test]
    fn test_store_dir_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("shop").join("mickeys.toml");

        let ctx = context_in(dir.path(), ShopConfig::default(), Some(config_path));
        assert_eq!(ctx.store_dir(), dir.path().join("shop").join(".mickeys/sessions"));

        let mut config = ShopConfig::default();
        config.session.store_dir = Some("carts".to_string());
        let ctx = context_in(dir.path(), config, None);
        assert_eq!(ctx.store_dir(), dir.path().join("carts"));
    }

    #[test]
    fn test_session_id_is_remembered() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context_in(dir.path(), ShopConfig::default(), None);
        let cache = ctx.cache().unwrap();

        let first = ctx.session_id(&cache).unwrap();
        assert!(first.as_str().starts_with("sess_"));
        assert_eq!(ctx.session_id(&cache).unwrap(), first);

        ctx.forget_session(&cache).unwrap();
        assert_ne!(ctx.session_id(&cache).unwrap(), first);
    }

    #[test]
    fn test_configured_session_id_wins() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ShopConfig::default();
        config.session.id = Some("sess_fixed".to_string());
        let ctx = context_in(dir.path(), config, None);

        let cache = ctx.cache().unwrap();
        assert_eq!(ctx.session_id(&cache).unwrap().as_str(), "sess_fixed");
    }

    #[test]
    fn test_cart_survives_between_runs() {
        use mickeys_commerce::catalog::Menu;
        use mickeys_commerce::ItemId;

        let dir = tempfile::tempdir().unwrap();
        let ctx = context_in(dir.path(), ShopConfig::default(), None);
        let platter = Menu::standard().find(&ItemId::from(1u32)).unwrap().to_cart_item();

        let (sessions, id) = ctx.cart_sessions().unwrap();
        let mut cart = sessions.load(&id).unwrap();
        cart.add_item(platter);
        sessions.save(&id, &cart).unwrap();

        let (sessions, again) = ctx.cart_sessions().unwrap();
        assert_eq!(again, id);
        assert_eq!(sessions.load(&again).unwrap().item_count(), 1);
    }
}
