// Naming helpers shared by the generators
use convert_case::{Case, Casing};

/// `UserList` / `userList` / `user_list` -> `user-list`
pub fn dasherize(name: &str) -> String {
    name.to_case(Case::Kebab)
}

/// `user-list` -> `UserList`
pub fn classify(name: &str) -> String {
    name.to_case(Case::Pascal)
}

pub fn component_class_name(name: &str) -> String {
    format!("{}Component", classify(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dasherize() {
        assert_eq!(dasherize("UserList"), "user-list");
        assert_eq!(dasherize("userList"), "user-list");
        assert_eq!(dasherize("user-list"), "user-list");
        assert_eq!(dasherize("UserDto"), "user-dto");
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("user-list"), "UserList");
        assert_eq!(classify("userList"), "UserList");
        assert_eq!(component_class_name("user-list"), "UserListComponent");
    }
}
