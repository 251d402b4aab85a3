//! Abstract factory: one factory per platform, each producing a matching
//! family of widgets.
//!
//! Run with: cargo run --bin abstract_factory

use std::fmt;
use std::str::FromStr;

use crate::error::RegistryError;
use crate::registry::{CreationRegistry, Product};

pub trait Button {
    fn click(&self) -> String;
}

pub trait CheckBox {
    fn check(&self) -> String;
}

/// Creates widgets that belong to the same platform family.
pub trait GuiFactory: Product + Send + Sync {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn CheckBox>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Mac,
    Linux,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::Mac, Platform::Linux];

    pub fn name(self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::Mac => "Mac",
            Platform::Linux => "Linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|platform| platform.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let known = Platform::ALL.iter().map(|p| p.name().to_string()).collect();
                RegistryError::unknown(s, known)
            })
    }
}

// =============================================================================
// Windows family
// =============================================================================

pub struct WindowsButton;
pub struct WindowsCheckBox;
pub struct WindowsFactory;

impl Button for WindowsButton {
    fn click(&self) -> String {
        "Windows Button clicked".to_string()
    }
}

impl CheckBox for WindowsCheckBox {
    fn check(&self) -> String {
        "Windows Checkbox checked".to_string()
    }
}

impl GuiFactory for WindowsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }

    fn create_checkbox(&self) -> Box<dyn CheckBox> {
        Box::new(WindowsCheckBox)
    }
}

impl Product for WindowsFactory {
    fn describe(&self) -> String {
        Platform::Windows.to_string()
    }
}

// =============================================================================
// Mac family
// =============================================================================

pub struct MacButton;
pub struct MacCheckBox;
pub struct MacFactory;

impl Button for MacButton {
    fn click(&self) -> String {
        "Mac Button clicked".to_string()
    }
}

impl CheckBox for MacCheckBox {
    fn check(&self) -> String {
        "Mac Checkbox checked".to_string()
    }
}

impl GuiFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }

    fn create_checkbox(&self) -> Box<dyn CheckBox> {
        Box::new(MacCheckBox)
    }
}

impl Product for MacFactory {
    fn describe(&self) -> String {
        Platform::Mac.to_string()
    }
}

// =============================================================================
// Linux family
// =============================================================================

pub struct LinuxButton;
pub struct LinuxCheckBox;
pub struct LinuxFactory;

impl Button for LinuxButton {
    fn click(&self) -> String {
        "Linux Button clicked".to_string()
    }
}

impl CheckBox for LinuxCheckBox {
    fn check(&self) -> String {
        "Linux Checkbox checked".to_string()
    }
}

impl GuiFactory for LinuxFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(LinuxButton)
    }

    fn create_checkbox(&self) -> Box<dyn CheckBox> {
        Box::new(LinuxCheckBox)
    }
}

impl Product for LinuxFactory {
    fn describe(&self) -> String {
        Platform::Linux.to_string()
    }
}

// =============================================================================
// Registry and client
// =============================================================================

pub type GuiRegistry = CreationRegistry<Platform, dyn GuiFactory>;

pub fn gui_registry() -> GuiRegistry {
    let mut registry = GuiRegistry::new();
    let entries: [(Platform, fn(()) -> Box<dyn GuiFactory>); 3] = [
        (Platform::Windows, |_| Box::new(WindowsFactory) as Box<dyn GuiFactory>),
        (Platform::Mac, |_| Box::new(MacFactory) as Box<dyn GuiFactory>),
        (Platform::Linux, |_| Box::new(LinuxFactory) as Box<dyn GuiFactory>),
    ];
    for (platform, constructor) in entries {
        registry
            .register(platform, constructor)
            .expect("each platform is registered once");
    }
    registry
}

/// Builds one widget of each kind and returns what they report.
///
/// The client only sees the factory trait; which family it gets is decided
/// by whoever picked the factory.
pub fn create_ui(factory: &dyn GuiFactory) -> Vec<String> {
    let button = factory.create_button();
    let checkbox = factory.create_checkbox();
    vec![button.click(), checkbox.check()]
}

/// Resolves a platform name and renders its widgets.
pub fn render_for(registry: &GuiRegistry, platform: &str) -> Result<Vec<String>, RegistryError> {
    let platform: Platform = platform.parse()?;
    let factory = registry.create(&platform, ())?;
    Ok(create_ui(factory.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_family_is_consistent() {
        let registry = gui_registry();
        for platform in Platform::ALL {
            let factory = registry.create(&platform, ()).unwrap();
            assert_eq!(factory.describe(), platform.name());

            let lines = create_ui(factory.as_ref());
            assert_eq!(
                lines,
                vec![
                    format!("{platform} Button clicked"),
                    format!("{platform} Checkbox checked"),
                ]
            );
        }
    }

    #[test]
    fn test_platform_parsing() {
        assert_eq!("Windows".parse::<Platform>().unwrap(), Platform::Windows);
        assert_eq!("mac".parse::<Platform>().unwrap(), Platform::Mac);
        assert_eq!(" LINUX ".parse::<Platform>().unwrap(), Platform::Linux);
    }

    #[test]
    fn test_unknown_platform() {
        let err = "Amiga".parse::<Platform>().unwrap_err();
        assert_eq!(
            err,
            RegistryError::unknown(
                "Amiga",
                vec!["Windows".into(), "Mac".into(), "Linux".into()]
            )
        );
    }

    #[test]
    fn test_render_for() {
        let registry = gui_registry();
        assert_eq!(
            render_for(&registry, "Linux").unwrap(),
            vec!["Linux Button clicked", "Linux Checkbox checked"]
        );
        assert!(render_for(&registry, "BeOS").is_err());
    }

    #[test]
    fn test_missing_family_is_not_substituted() {
        let mut registry = GuiRegistry::new();
        registry
            .register(Platform::Mac, |_| Box::new(MacFactory) as Box<dyn GuiFactory>)
            .unwrap();

        let err = render_for(&registry, "Windows").unwrap_err();
        assert_eq!(err, RegistryError::unknown("Windows", vec!["Mac".into()]));
    }

    #[test]
    fn test_catalog() {
        let labels: Vec<String> = gui_registry()
            .catalog(())
            .into_iter()
            .map(|(_, label)| label)
            .collect();
        assert_eq!(labels, vec!["Linux", "Mac", "Windows"]);
    }
}
