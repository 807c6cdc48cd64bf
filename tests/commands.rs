use mockito::Server;

mod testcfg;

#[test]
fn setup_fpm_version() {
    testcfg::setup(&|cfg| {
        let expected_version = format!("setup-fpm {}\n", clap::crate_version!());

        let output = cfg.setup_fpm(&["--version"]);

        assert_eq!(output.stdout, expected_version);
    });
}

#[test]
fn filename_prints_asset_name() {
    testcfg::setup(&|cfg| {
        let output = cfg.setup_fpm(&["filename", "v0.10.0", "--platform", "linux"]);
        assert!(output.status.success());
        assert_eq!(output.stdout.trim(), "fpm-0.10.0-linux-x86_64");

        let output = cfg.setup_fpm(&["filename", "1.0.0", "--platform", "windows"]);
        assert_eq!(output.stdout.trim(), "fpm-1.0.0-windows-x86_64.exe");

        let output = cfg.setup_fpm(&[
            "filename",
            "v0.9.0",
            "--platform",
            "linux",
            "--compiler",
            "gcc-12",
        ]);
        assert_eq!(output.stdout.trim(), "fpm-0.9.0-linux-x86_64-gcc-12");
    });
}

#[test]
fn resolve_explicit_version_is_passed_through() {
    testcfg::setup(&|cfg| {
        let output = cfg.setup_fpm(&["resolve", "--fpm-version", "v0.8.2"]);
        assert!(output.status.success());
        assert_eq!(output.stdout.trim(), "v0.8.2");
    });
}

#[test]
fn resolve_latest_reports_bad_token() {
    let mut server = Server::new();
    let api = server
        .mock("GET", "/repos/fortran-lang/fpm/releases/latest")
        .with_status(401)
        .with_body(r#"{"message":"Bad credentials"}"#)
        .expect(1)
        .create();
    let url = server.url();

    testcfg::setup(&|cfg| {
        let output = cfg.setup_fpm(&[
            "resolve",
            "--github-token",
            "bad",
            "--github-api-url",
            &url,
        ]);

        assert!(!output.status.success());
        assert!(output.stdout.contains(
            "::error::Error while querying the latest fpm release version - please check your github token."
        ));
    });

    api.assert();
}
