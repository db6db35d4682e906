use system_env::*;

mod arch {
    use super::*;

    #[test]
    fn parses_packaging_names() {
        assert_eq!("amd64".parse::<SystemArch>().unwrap(), SystemArch::Amd64);
        assert_eq!("i386".parse::<SystemArch>().unwrap(), SystemArch::I386);
        assert_eq!("armhf".parse::<SystemArch>().unwrap(), SystemArch::Armhf);
        assert_eq!("arm64".parse::<SystemArch>().unwrap(), SystemArch::Arm64);
        assert_eq!(
            "ppc64el".parse::<SystemArch>().unwrap(),
            SystemArch::Ppc64el
        );
        assert_eq!("s390x".parse::<SystemArch>().unwrap(), SystemArch::S390x);
        assert_eq!(
            "riscv64".parse::<SystemArch>().unwrap(),
            SystemArch::Riscv64
        );
    }

    #[test]
    fn parses_kernel_names() {
        assert_eq!("x86_64".parse::<SystemArch>().unwrap(), SystemArch::Amd64);
        assert_eq!("i686".parse::<SystemArch>().unwrap(), SystemArch::I386);
        assert_eq!("armv7l".parse::<SystemArch>().unwrap(), SystemArch::Armhf);
        assert_eq!("aarch64".parse::<SystemArch>().unwrap(), SystemArch::Arm64);
        assert_eq!(
            "ppc64le".parse::<SystemArch>().unwrap(),
            SystemArch::Ppc64el
        );
        assert_eq!("AMD64".parse::<SystemArch>().unwrap(), SystemArch::Amd64);
    }

    #[cfg(target_endian = "little")]
    #[test]
    fn maps_powerpc64_to_little_endian() {
        assert_eq!(
            "powerpc64".parse::<SystemArch>().unwrap(),
            SystemArch::Ppc64el
        );
    }

    #[cfg(target_endian = "big")]
    #[test]
    fn rejects_big_endian_powerpc64() {
        assert!("powerpc64".parse::<SystemArch>().is_err());
    }

    #[test]
    fn errors_for_unknown_names() {
        let error = "sparc".parse::<SystemArch>().unwrap_err();

        assert_eq!(
            error.to_string(),
            "Unknown or unsupported architecture `sparc`."
        );
    }

    #[test]
    fn displays_packaging_names() {
        assert_eq!(SystemArch::Amd64.to_string(), "amd64");
        assert_eq!(SystemArch::Armhf.to_string(), "armhf");
        assert_eq!(SystemArch::Ppc64el.to_string(), "ppc64el");
    }

    #[test]
    fn returns_triplets() {
        assert_eq!(SystemArch::Amd64.triplet(), "x86_64-linux-gnu");
        assert_eq!(SystemArch::Armhf.triplet(), "arm-linux-gnueabihf");
        assert_eq!(SystemArch::Arm64.triplet(), "aarch64-linux-gnu");
        assert_eq!(SystemArch::Ppc64el.triplet(), "powerpc64le-linux-gnu");
    }

    #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
    #[test]
    fn detects_from_env() {
        let arch = SystemArch::from_env().unwrap();

        if cfg!(target_arch = "x86_64") {
            assert_eq!(arch, SystemArch::Amd64);
        } else {
            assert_eq!(arch, SystemArch::Arm64);
        }
    }
}

mod helpers {
    use super::*;

    #[test]
    fn joins_command_lines() {
        assert_eq!(
            join_command_line("go", ["list", "-f", "{{.ImportPath}} {{.Name}}"]),
            "go list -f '{{.ImportPath}} {{.Name}}'"
        );
        assert_eq!(join_command_line("go", Vec::<String>::new()), "go");
    }

    #[test]
    fn keeps_explicit_paths() {
        let command = create_process_command("/usr/local/go/bin/go", ["version"]);

        assert_eq!(command.get_program(), "/usr/local/go/bin/go");
        assert_eq!(command.get_args().collect::<Vec<_>>(), vec!["version"]);
    }

    #[test]
    fn falls_back_to_bare_name() {
        let command = create_process_command("partkit-missing-program", ["-h"]);

        assert_eq!(command.get_program(), "partkit-missing-program");
        assert!(!is_command_on_path("partkit-missing-program"));
    }
}
