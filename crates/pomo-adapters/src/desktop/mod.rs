mod notifier;

pub use notifier::DesktopNotifier;
