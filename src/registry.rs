//! Discriminator -> constructor registry.
//!
//! A [`CreationRegistry`] owns a flat table of constructors. Each entry is
//! keyed by a discriminator (a string or an enum) and produces a boxed
//! product that satisfies the family's capability trait. Registration is a
//! startup activity: `register` takes `&mut self`, so once the registry is
//! shared behind `&` or a `static` it is read-only and safe to query from
//! any thread.

use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::hash::Hash;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::RegistryError;

/// Capability shared by every product a registry hands out.
pub trait Product {
    /// Human-readable family label, e.g. `"Standard Ride"` or `"Windows"`.
    fn describe(&self) -> String;
}

/// Boxed constructor stored per discriminator.
pub type Constructor<P, A> = Box<dyn Fn(A) -> Box<P> + Send + Sync>;

/// What `register` does when the discriminator is already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail with [`RegistryError::DuplicateDiscriminator`], keep the old entry.
    #[default]
    Reject,
    /// Swap in the new constructor.
    Replace,
}

pub struct CreationRegistry<K, P: ?Sized, A = ()> {
    entries: HashMap<K, Constructor<P, A>>,
    policy: DuplicatePolicy,
}

impl<K, P: ?Sized, A> CreationRegistry<K, P, A>
where
    K: Eq + Hash + Display,
{
    /// Empty registry that rejects duplicate discriminators.
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::Reject)
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            entries: HashMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Adds `constructor` under `key`.
    ///
    /// Under [`DuplicatePolicy::Reject`] an existing key is an error and the
    /// registry is left unchanged. Under [`DuplicatePolicy::Replace`] the new
    /// constructor wins.
    pub fn register<F>(&mut self, key: K, constructor: F) -> Result<(), RegistryError>
    where
        F: Fn(A) -> Box<P> + Send + Sync + 'static,
    {
        let policy = self.policy;
        match self.entries.entry(key) {
            Entry::Occupied(mut slot) => match policy {
                DuplicatePolicy::Reject => {
                    let key = slot.key().to_string();
                    warn!(discriminator = %key, "rejected duplicate registration");
                    Err(RegistryError::duplicate(key))
                }
                DuplicatePolicy::Replace => {
                    debug!(discriminator = %slot.key(), "replaced constructor");
                    drop(slot.insert(Box::new(constructor)));
                    Ok(())
                }
            },
            Entry::Vacant(slot) => {
                debug!(discriminator = %slot.key(), "registered constructor");
                slot.insert(Box::new(constructor));
                Ok(())
            }
        }
    }

    /// Builds a fresh product for `key`.
    ///
    /// Unknown keys fail with [`RegistryError::UnknownDiscriminator`]; there is
    /// no fallback product.
    pub fn create<Q>(&self, key: &Q, args: A) -> Result<Box<P>, RegistryError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        match self.entries.get(key) {
            Some(constructor) => {
                debug!(discriminator = %key, "creating product");
                Ok(constructor(args))
            }
            None => {
                warn!(discriminator = %key, "unknown discriminator");
                Err(RegistryError::unknown(key.to_string(), self.known()))
            }
        }
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered keys, ordered by their display form.
    pub fn discriminators(&self) -> Vec<&K> {
        let mut keys: Vec<&K> = self.entries.keys().collect();
        keys.sort_by_cached_key(|key| key.to_string());
        keys
    }

    fn known(&self) -> Vec<String> {
        self.discriminators()
            .into_iter()
            .map(|key| key.to_string())
            .collect()
    }
}

impl<K, P, A> CreationRegistry<K, P, A>
where
    K: Eq + Hash + Display,
    P: Product + ?Sized,
    A: Clone,
{
    /// One `(key, describe())` pair per entry, in discriminator order.
    pub fn catalog(&self, args: A) -> Vec<(&K, String)> {
        self.discriminators()
            .into_iter()
            .map(|key| {
                let product = (self.entries[key])(args.clone());
                (key, product.describe())
            })
            .collect()
    }
}

impl<K, P: ?Sized, A> Default for CreationRegistry<K, P, A>
where
    K: Eq + Hash + Display,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P: ?Sized, A> fmt::Debug for CreationRegistry<K, P, A>
where
    K: Eq + Hash + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreationRegistry")
            .field("policy", &self.policy)
            .field("discriminators", &self.known())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Shape: Product {
        fn area(&self) -> f64;
    }

    struct Square(f64);
    struct Circle(f64);

    impl Product for Square {
        fn describe(&self) -> String {
            "Square".to_string()
        }
    }

    impl Shape for Square {
        fn area(&self) -> f64 {
            self.0 * self.0
        }
    }

    impl Product for Circle {
        fn describe(&self) -> String {
            "Circle".to_string()
        }
    }

    impl Shape for Circle {
        fn area(&self) -> f64 {
            3.0 * self.0 * self.0
        }
    }

    fn shapes(policy: DuplicatePolicy) -> CreationRegistry<String, dyn Shape, f64> {
        let mut registry: CreationRegistry<String, dyn Shape, f64> =
            CreationRegistry::with_policy(policy);
        registry
            .register("square".to_string(), |side| Box::new(Square(side)) as Box<dyn Shape>)
            .unwrap();
        registry
            .register("circle".to_string(), |radius| Box::new(Circle(radius)) as Box<dyn Shape>)
            .unwrap();
        registry
    }

    #[test]
    fn test_create_passes_arguments() {
        let registry = shapes(DuplicatePolicy::Reject);
        let square = registry.create("square", 3.0).unwrap();
        assert_eq!(square.area(), 9.0);
        assert_eq!(square.describe(), "Square");

        let circle = registry.create("circle", 2.0).unwrap();
        assert_eq!(circle.area(), 12.0);
    }

    #[test]
    fn test_unknown_discriminator_is_an_error() {
        let registry = shapes(DuplicatePolicy::Reject);
        let err = registry.create("hexagon", 1.0).err().unwrap();
        assert_eq!(
            err,
            RegistryError::unknown("hexagon", vec!["circle".into(), "square".into()])
        );
    }

    #[test]
    fn test_empty_registry_has_no_fallback() {
        let registry: CreationRegistry<String, dyn Shape, f64> = CreationRegistry::new();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.create("square", 1.0),
            Err(RegistryError::UnknownDiscriminator { .. })
        ));
    }

    #[test]
    fn test_reject_policy_keeps_original() {
        let mut registry = shapes(DuplicatePolicy::Reject);
        let result =
            registry.register("square".to_string(), |_| Box::new(Circle(1.0)) as Box<dyn Shape>);

        assert_eq!(result, Err(RegistryError::duplicate("square")));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.create("square", 1.0).unwrap().describe(), "Square");
    }

    #[test]
    fn test_replace_policy_overwrites() {
        let mut registry = shapes(DuplicatePolicy::Replace);
        registry
            .register("square".to_string(), |r| Box::new(Circle(r)) as Box<dyn Shape>)
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.create("square", 1.0).unwrap().describe(), "Circle");
    }

    #[test]
    fn test_default_policy_is_reject() {
        let registry: CreationRegistry<String, dyn Shape, f64> = CreationRegistry::default();
        assert_eq!(registry.policy(), DuplicatePolicy::Reject);
    }

    #[test]
    fn test_discriminators_sorted() {
        let registry = shapes(DuplicatePolicy::Reject);
        let keys: Vec<&str> = registry
            .discriminators()
            .into_iter()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["circle", "square"]);
        assert!(registry.contains("circle"));
        assert!(!registry.contains("triangle"));
    }

    #[test]
    fn test_catalog_describes_every_entry() {
        let registry = shapes(DuplicatePolicy::Reject);
        let catalog: Vec<(String, String)> = registry
            .catalog(1.0)
            .into_iter()
            .map(|(key, label)| (key.clone(), label))
            .collect();
        assert_eq!(
            catalog,
            vec![
                ("circle".to_string(), "Circle".to_string()),
                ("square".to_string(), "Square".to_string()),
            ]
        );
    }

    #[test]
    fn test_products_are_not_cached() {
        let registry = shapes(DuplicatePolicy::Reject);
        let a = registry.create("square", 2.0).unwrap();
        let b = registry.create("square", 5.0).unwrap();
        assert_eq!(a.area(), 4.0);
        assert_eq!(b.area(), 25.0);
    }

    #[test]
    fn test_registry_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CreationRegistry<String, dyn Shape, f64>>();

        let registry = std::sync::Arc::new(shapes(DuplicatePolicy::Reject));
        let handles: Vec<_> = (1..=4)
            .map(|side| {
                let registry = std::sync::Arc::clone(&registry);
                std::thread::spawn(move || registry.create("square", side as f64).unwrap().area())
            })
            .collect();

        let areas: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(areas, vec![1.0, 4.0, 9.0, 16.0]);
    }

    #[test]
    fn test_debug_lists_keys() {
        let registry = shapes(DuplicatePolicy::Reject);
        let debug = format!("{:?}", registry);
        assert!(debug.contains("circle"));
        assert!(debug.contains("Reject"));
    }
}
