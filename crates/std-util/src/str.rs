use heck::{ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

pub fn upper_snake_case(src: &str) -> String {
    src.to_shouty_snake_case()
}

pub fn camel_case(src: &str) -> String {
    src.to_lower_camel_case()
}

pub fn upper_camel_case(src: &str) -> String {
    src.to_upper_camel_case()
}
