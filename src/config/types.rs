use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub observer: ObserverConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub content: PageContent,
    /// Directory that relative asset paths are resolved against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

/// Timing and scrolling behaviour of the terminal UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Interval between UI ticks in milliseconds (default: 50).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Rows scrolled per arrow key / wheel notch (default: 1).
    #[serde(default = "default_scroll_step")]
    pub scroll_step: u16,
    /// Smooth scrolling covers 1/n of the remaining distance per tick (default: 4).
    #[serde(default = "default_smooth_divisor")]
    pub smooth_divisor: u16,
    /// Height of the navigation bar in rows (default: 3).
    #[serde(default = "default_nav_height")]
    pub nav_height: u16,
}

/// Viewport observer options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverConfig {
    /// Visible fraction of a section that reveals it (default: 0.15).
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f32,
    /// Rows outside the viewport at which deferred images start loading (default: 12).
    #[serde(default = "default_lazy_margin_rows")]
    pub lazy_margin_rows: u16,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to the platform cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Everything the page displays. Fields left out of the file keep the
/// built-in copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageContent {
    pub brand: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub features: Vec<Feature>,
    pub tabs: Vec<TabContent>,
    pub slides: Vec<Slide>,
    pub signup_title: String,
    pub footer_links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub text: String,
    /// Full-resolution image, loaded when the feature nears the viewport.
    pub image: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabContent {
    pub label: String,
    pub heading: String,
    pub text: String,
}

/// One testimonial panel of the carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub heading: String,
    pub quote: String,
    pub author: String,
    pub location: String,
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_scroll_step() -> u16 {
    1
}

fn default_smooth_divisor() -> u16 {
    4
}

fn default_nav_height() -> u16 {
    3
}

fn default_reveal_threshold() -> f32 {
    0.15
}

fn default_lazy_margin_rows() -> u16 {
    12
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            observer: ObserverConfig::default(),
            logging: LoggingConfig::default(),
            content: PageContent::default(),
            base_dir: PathBuf::from("."),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            scroll_step: default_scroll_step(),
            smooth_divisor: default_smooth_divisor(),
            nav_height: default_nav_height(),
        }
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: default_reveal_threshold(),
            lazy_margin_rows: default_lazy_margin_rows(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            brand: "Bankist".to_string(),
            hero_title: "When banking meets minimalist".to_string(),
            hero_subtitle: "A simpler banking experience for a simpler life.".to_string(),
            features: vec![
                Feature {
                    title: "100% digital bank".to_string(),
                    text: "Open an account in minutes and manage everything from your phone. \
                           No branches, no paperwork, no queues."
                        .to_string(),
                    image: PathBuf::from("img/digital.png"),
                },
                Feature {
                    title: "Watch your money grow".to_string(),
                    text: "Savings goals, round-ups and interest that is paid out daily \
                           instead of once a year."
                        .to_string(),
                    image: PathBuf::from("img/grow.png"),
                },
                Feature {
                    title: "Free debit card included".to_string(),
                    text: "Pay anywhere in the world without fees and freeze the card \
                           with a single tap."
                        .to_string(),
                    image: PathBuf::from("img/card.png"),
                },
            ],
            tabs: vec![
                TabContent {
                    label: "01 Instant Transfers".to_string(),
                    heading: "Transfer money to anyone, instantly! No fees, no BS.".to_string(),
                    text: "Send money to friends and family in seconds, in any currency, \
                           at the real exchange rate."
                        .to_string(),
                },
                TabContent {
                    label: "02 Instant Loans".to_string(),
                    heading: "Buy a home or make your dreams come true, with instant loans."
                        .to_string(),
                    text: "Get approved in minutes. Rates are fixed and shown up front, \
                           with no hidden charges."
                        .to_string(),
                },
                TabContent {
                    label: "03 Instant Closing".to_string(),
                    heading: "No longer need your account? No problem! Close it instantly."
                        .to_string(),
                    text: "Closing takes one tap. Your remaining balance is transferred \
                           wherever you want it."
                        .to_string(),
                },
            ],
            slides: vec![
                Slide {
                    heading: "Best financial decision ever!".to_string(),
                    quote: "Switching took ten minutes and I have not thought about my bank \
                            since, which is exactly what I wanted."
                        .to_string(),
                    author: "Aarav Lynn".to_string(),
                    location: "San Francisco, USA".to_string(),
                },
                Slide {
                    heading: "The last step to becoming a complete minimalist".to_string(),
                    quote: "One app, one card, no paperwork. It fits the way I live."
                        .to_string(),
                    author: "Miyah Miles".to_string(),
                    location: "London, UK".to_string(),
                },
                Slide {
                    heading: "Finally free from old-school banks".to_string(),
                    quote: "Transfers arrive instantly and support answers in minutes. \
                            I am never going back."
                        .to_string(),
                    author: "Francisco Gomes".to_string(),
                    location: "Lisbon, Portugal".to_string(),
                },
            ],
            signup_title: "The best day to join Bankist was one year ago. The second best is today!"
                .to_string(),
            footer_links: vec![
                "About".to_string(),
                "Pricing".to_string(),
                "Terms of Use".to_string(),
                "Privacy Policy".to_string(),
                "Careers".to_string(),
                "Contact Us".to_string(),
            ],
        }
    }
}
