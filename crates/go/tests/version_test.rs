use partkit_go::*;

mod go_version {
    use super::*;

    #[test]
    fn parses_full_versions() {
        let version = GoVersion::parse_output("go version go1.21.4 linux/amd64").unwrap();

        assert_eq!(version, GoVersion::new(1, 21, 4));
        assert_eq!(version.major(), 1);
        assert_eq!(version.minor(), 21);
        assert_eq!(version.patch(), 4);
    }

    #[test]
    fn parses_partial_versions() {
        assert_eq!(
            GoVersion::parse_output("go version go1.13 linux/amd64").unwrap(),
            GoVersion::new(1, 13, 0)
        );
        assert_eq!(
            GoVersion::parse_output("go version go13 linux/amd64").unwrap(),
            GoVersion::new(13, 0, 0)
        );
    }

    #[test]
    fn ignores_pre_release_suffixes() {
        assert_eq!(
            GoVersion::parse_output("go version go1.22rc1 darwin/arm64").unwrap(),
            GoVersion::new(1, 22, 0)
        );
    }

    #[test]
    fn errors_for_unknown_output() {
        for output in [
            "",
            "go version devel +b0a8ee2 linux/amd64",
            "bash: go: command not found",
            "ergo1.2",
        ] {
            assert!(matches!(
                GoVersion::parse_output(output),
                Err(GoPluginError::UnparseableVersion { .. })
            ));
        }
    }

    #[test]
    fn errors_for_overflowing_numbers() {
        assert!(GoVersion::parse_output("go version go99999999999999999999999.1").is_err());
    }

    #[test]
    fn compares_as_triples() {
        assert!(GoVersion::new(1, 6, 4) < GoVersion::new(1, 13, 0));
        assert!(GoVersion::new(1, 13, 0) < GoVersion::new(1, 13, 1));
        assert!(GoVersion::new(13, 0, 0) > GoVersion::new(1, 21, 4));
    }

    #[test]
    fn gates_module_support() {
        assert!(!GoVersion::new(1, 6, 4).supports_modules());
        assert!(!GoVersion::new(1, 12, 17).supports_modules());
        assert!(GoVersion::new(1, 13, 0).supports_modules());
        assert!(GoVersion::new(13, 0, 0).supports_modules());
    }

    #[test]
    fn formats_too_old_error() {
        let error = GoPluginError::ModuleVersionTooOld {
            detected: GoVersion::new(1, 6, 4),
            required: MINIMUM_MODULES_VERSION,
        };
        let message = error.to_string();

        assert!(message.contains("1.13.0"));
        assert!(message.contains("1.6.4"));
    }
}

mod build_mode {
    use super::*;
    use starbase_sandbox::create_empty_sandbox;

    #[test]
    fn detects_modules() {
        let sandbox = create_empty_sandbox();
        sandbox.create_file("go.mod", "module example.com/app\n");

        assert_eq!(BuildMode::detect(sandbox.path()), BuildMode::Modules);
    }

    #[test]
    fn defaults_to_gopath() {
        let sandbox = create_empty_sandbox();
        sandbox.create_file("main.go", "package main\n");

        assert_eq!(BuildMode::detect(sandbox.path()), BuildMode::GoPath);
        assert_eq!(
            BuildMode::detect(&sandbox.path().join("missing")),
            BuildMode::GoPath
        );
    }
}
