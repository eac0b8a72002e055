use serde::Deserialize;

const DEFAULT_LOGIN_TITLE: &str = "Google Login App";
const DEFAULT_LOGIN_IMAGE_URL: &str = "https://images.unsplash.com/photo-1623615412998-c63b6d5fe9be?fm=jpg&q=60&w=3000";
const DEFAULT_APP_TITLE: &str = "Butterfly Classifier";
const DEFAULT_APP_IMAGE_URL: &str =
    "https://t4.ftcdn.net/jpg/10/09/58/79/360_F_1009587933_xfLSLUHWaMJDnhvB6rJFtYZosRs0ObNr.jpg";

/// Static page text and imagery
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    pub hero_image_url: String,
    pub app_title: String,
    pub app_image_url: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: String::from(DEFAULT_LOGIN_TITLE),
            hero_image_url: String::from(DEFAULT_LOGIN_IMAGE_URL),
            app_title: String::from(DEFAULT_APP_TITLE),
            app_image_url: String::from(DEFAULT_APP_IMAGE_URL),
        }
    }
}
