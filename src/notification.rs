//! Factory method for notifications: the caller names a channel, the
//! registry decides which concrete notification to build.
//!
//! Run with: cargo run --bin factory_method

use std::fmt;
use std::str::FromStr;

use crate::error::RegistryError;
use crate::registry::{CreationRegistry, Product};

pub trait Notification: Product + Send + Sync {
    fn notify(&self, message: &str) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Email,
    Sms,
    Push,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Email, Channel::Sms, Channel::Push];

    pub fn name(self) -> &'static str {
        match self {
            Channel::Email => "email",
            Channel::Sms => "sms",
            Channel::Push => "push",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Channel::ALL
            .into_iter()
            .find(|channel| channel.name() == wanted)
            .ok_or_else(|| {
                let known = Channel::ALL.iter().map(|c| c.name().to_string()).collect();
                RegistryError::unknown(s, known)
            })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmailNotification;

impl Notification for EmailNotification {
    fn notify(&self, message: &str) -> String {
        format!("Sending email with message: {message}")
    }
}

impl Product for EmailNotification {
    fn describe(&self) -> String {
        "Email".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SmsNotification;

impl Notification for SmsNotification {
    fn notify(&self, message: &str) -> String {
        format!("Sending SMS with message: {message}")
    }
}

impl Product for SmsNotification {
    fn describe(&self) -> String {
        "SMS".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PushNotification;

impl Notification for PushNotification {
    fn notify(&self, message: &str) -> String {
        format!("Sending push notification with message: {message}")
    }
}

impl Product for PushNotification {
    fn describe(&self) -> String {
        "Push".to_string()
    }
}

pub type NotificationRegistry = CreationRegistry<Channel, dyn Notification>;

pub fn notification_registry() -> NotificationRegistry {
    let mut registry = NotificationRegistry::new();
    let entries: [(Channel, fn(()) -> Box<dyn Notification>); 3] = [
        (Channel::Email, |_| Box::new(EmailNotification) as Box<dyn Notification>),
        (Channel::Sms, |_| Box::new(SmsNotification) as Box<dyn Notification>),
        (Channel::Push, |_| Box::new(PushNotification) as Box<dyn Notification>),
    ];
    for (channel, constructor) in entries {
        registry
            .register(channel, constructor)
            .expect("each channel is registered once");
    }
    registry
}

/// Builds the notification for `channel` and returns what it would send.
pub fn send_notification(
    registry: &NotificationRegistry,
    channel: Channel,
    message: &str,
) -> Result<String, RegistryError> {
    let notification = registry.create(&channel, ())?;
    Ok(notification.notify(message))
}
