//! Process-wide table of colormaps, so that a plotting routine can
//! refer to a colormap by name.
//!
//! Nothing is registered until [`register_colormaps`] is called.
//!
//! ```
//! tol_colors::register_colormaps();
//! let cmap = tol_colors::registered("tol.sunset").unwrap();
//! assert_eq!(cmap.name(), "sunset");
//! ```

use std::collections::BTreeMap;
use lazy_static::lazy_static;
use log::debug;
use parking_lot::RwLock;
use crate::colormaps::{self, Colormap};

/// Prefix of the keys of the catalogue colormaps.
pub const NAMESPACE: &str = "tol";

lazy_static! {
    static ref REGISTRY: RwLock<BTreeMap<String, Colormap>> =
        RwLock::new(BTreeMap::new());
}

/// Key under which the catalogue colormap `name` is registered.
pub fn key(name: &str) -> String { format!("{NAMESPACE}.{name}") }

/// Register every colormap of the catalogue under `tol.<name>`.
/// Calling it again replaces the entries by identical ones.  Returns
/// the number of colormaps registered.
pub fn register_colormaps() -> usize {
    let mut reg = REGISTRY.write();
    let mut n = 0;
    for cmap in colormaps::colormaps() {
        reg.insert(key(cmap.name()), cmap.clone());
        n += 1;
    }
    debug!("registered {n} colormaps under “{NAMESPACE}.”");
    n
}

/// Register `cmap` under `key`, replacing and returning the
/// colormap previously registered under that key, if any.
pub fn register(key: impl Into<String>, cmap: Colormap) -> Option<Colormap> {
    let key = key.into();
    debug!("registering colormap “{}” as “{key}”", cmap.name());
    REGISTRY.write().insert(key, cmap)
}

/// Return the colormap registered under `key`.
pub fn registered(key: &str) -> Option<Colormap> {
    REGISTRY.read().get(key).cloned()
}

/// Keys of all registered colormaps, sorted.
pub fn registered_names() -> Vec<String> {
    REGISTRY.read().keys().cloned().collect()
}
