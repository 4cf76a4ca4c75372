use super::*;

fn parse(args: &[&str]) -> Config {
    Config::try_parse_from(std::iter::once("shapeview").chain(args.iter().copied())).unwrap()
}

#[test]
fn defaults_listen_on_localhost_5000_in_dev_mode() {
    let config = parse(&[]);
    assert_eq!(config.addr(), "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
    assert!(config.dev);
    assert!(config.pkg_dir.ends_with("scene/pkg"));
}

#[test]
fn host_and_port_override() {
    let config = parse(&["--host", "0.0.0.0", "--port", "8080"]);
    assert_eq!(config.addr(), "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
}

#[test]
fn dev_can_be_switched_off() {
    assert!(!parse(&["--dev", "false"]).dev);
}

#[test]
fn pkg_dir_override() {
    let config = parse(&["--pkg-dir", "/srv/viewer/pkg"]);
    assert_eq!(config.pkg_dir, PathBuf::from("/srv/viewer/pkg"));
}

#[test]
fn invalid_port_is_rejected() {
    assert!(Config::try_parse_from(["shapeview", "--port", "70000"]).is_err());
    assert!(Config::try_parse_from(["shapeview", "--host", "not-an-ip"]).is_err());
}

#[test]
fn dev_help_says_reload_is_manual() {
    use clap::CommandFactory;

    let command = Config::command();
    let dev = command.get_arguments().find(|arg| arg.get_id() == "dev").unwrap();
    let help = dev.get_long_help().or(dev.get_help()).unwrap().to_string();
    assert!(help.contains("no auto-reload"), "{help}");
}
