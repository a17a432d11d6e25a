mod common;

use common::TestEnv;

#[test]
fn configure_writes_config_file() {
    let env = TestEnv::new();

    let result = env.run(&["configure", "key123", "secret", "shop.example.com"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Configured:"));
    let written = env.read("config.yml");
    assert!(written.contains("api_key: key123"));
    assert!(written.contains("password: secret"));
    assert!(written.contains("store: shop.example.com"));
}

#[test]
fn configure_refuses_to_overwrite() {
    let env = TestEnv::new();
    env.write("config.yml", "api_key: old\npassword: old\nstore: old.example.com\n");

    let result = env.run(&["configure", "new", "new", "new.example.com"]);

    assert!(!result.success);
    assert!(result.stderr.contains("already exists"), "{}", result.stderr);
    assert!(env.read("config.yml").contains("api_key: old"));
}

#[test]
fn configure_force_overwrites() {
    let env = TestEnv::new();
    env.write("config.yml", "api_key: old\npassword: old\nstore: old.example.com\n");

    let result = env.run(&["configure", "new", "pw", "new.example.com", "--force"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.read("config.yml").contains("api_key: new"));
}

#[test]
fn configure_json_output() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "configure", "k", "p", "shop.example.com"]);

    assert!(result.success, "{}", result.combined_output());
    let line: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
    assert_eq!(line["event"], "configured");
    assert_eq!(line["store"], "shop.example.com");
}
