//! Identifier casing helpers.

use heck::{ToKebabCase, ToLowerCamelCase, ToUpperCamelCase};

/// `DropdownMenu` -> `dropdown-menu`
pub fn to_kebab_case(s: &str) -> String {
    s.to_kebab_case()
}

/// `password-input` -> `PasswordInput`
pub fn to_pascal_case(s: &str) -> String {
    s.to_upper_camel_case()
}

/// `PasswordInput` -> `passwordInput`
pub fn to_camel_case(s: &str) -> String {
    s.to_lower_camel_case()
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Name of the generated wrapper function for a component.
pub fn example_fn_name(component: &str) -> String {
    format!("{}Example", to_pascal_case(component))
}
