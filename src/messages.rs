pub const EMPTY_PROMPT_WARNING: &str = "Please enter a prompt.";

pub const GENERIC_ERROR: &str = "An error occurred. Please try again.";

pub const NOT_FOUND: &str = "Not found";

pub const NOT_AVAILABLE: &str = "Not available";

const ANALYSIS_TEMPLATE: &str =
    "Based on your prompt, I recommend looking for jobs at {business_type} in {location}.";

pub fn analysis_message(business_type: &str, location: &str) -> String {
    ANALYSIS_TEMPLATE
        .replace("{business_type}", business_type)
        .replace("{location}", location)
}

pub fn server_error_message(error: &str) -> String {
    format!("Error: {}", error)
}
