diesel::table! {
    source_packages (idx) {
        idx -> Integer,
        projects -> Text,
        package_name -> Text,
        description -> Text,
        repository_url -> Text,
    }
}
