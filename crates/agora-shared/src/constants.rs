/// Application title shown above the feed
pub const APP_TITLE: &str = "Social Feed";

/// Display name used for posts and comments authored locally
pub const CURRENT_USER: &str = "You";

/// Maximum image attachment size in bytes (5 MiB)
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

/// Page location used when none is configured
pub const DEFAULT_PAGE_URL: &str = "http://localhost:8080/";

/// Share-intent endpoints
pub const FACEBOOK_SHARE_URL: &str = "https://www.facebook.com/sharer/sharer.php";
pub const TWITTER_SHARE_URL: &str = "https://twitter.com/intent/tweet";

/// Window features passed along when opening a share intent
pub const SHARE_WINDOW_FEATURES: &str = "width=600,height=400";
