#[cfg(feature = "assets")]
mod assets {
    use clap::CommandFactory;
    use clap::ValueEnum;
    use clap_complete::{Shell, generate_to};
    use clap_complete_nushell::Nushell;
    use clap_mangen::Man;

    use std::{env, fs::create_dir_all, path::Path};

    include!("src/cli.rs");

    const NAME: &str = "inference-hub";

    pub fn generate() {
        let Some(dir) = env::var_os("ASSET_DIR") else {
            eprintln!("ASSET_DIR environment variable not set");
            eprintln!("Not able to generate completion files");
            eprintln!("Not able to generate manpage files");
            return;
        };
        let out = Path::new(&dir);
        create_dir_all(out).expect("Could not create ASSET_DIR");
        let cmd = &mut CliArgs::command();

        gen_man(out.to_path_buf());

        for shell in Shell::value_variants() {
            generate_to(*shell, cmd, NAME.to_string(), out)
                .expect("Not able to generate completions");
        }
        generate_to(Nushell, cmd, NAME.to_string(), out)
            .expect("Not able to generate nushell completions");
    }

    fn gen_man(dir: PathBuf) {
        use roff::Roff;
        use std::fs::write;

        let path = dir.join(format!("{NAME}.1"));
        let mut buf: Vec<u8> = Vec::new();
        let man = Man::new(CliArgs::command());

        man.render_title(&mut buf)
            .expect("Not able to render title.");
        man.render_name_section(&mut buf)
            .expect("Not able to render name section.");
        man.render_synopsis_section(&mut buf)
            .expect("Not able to render synopsis section.");

        let mut roff = Roff::new();
        roff.control("SH", ["DESCRIPTION"]);
        roff.text([
            "Submit a path or a piece of text to an inference service and read the result. \
             Windows drive paths are rewritten to their /mnt location before sending. \
             Without a configured endpoint a local simulated responder is used."
                .into(),
        ]);
        roff.control("SH", ["EXAMPLES"]);
        roff.text(["inference-hub --non-interactive 'D:\\videos\\clip.mp4'".into()]);
        roff.text(["Analyze a single file and print the result.".into()]);
        roff.to_writer(&mut buf)
            .expect("Not able to write description.");

        man.render_options_section(&mut buf)
            .expect("Not able to render options section.");
        man.render_version_section(&mut buf)
            .expect("Not able to render version section.");
        man.render_authors_section(&mut buf)
            .expect("Not able to render authors section.");

        write(path, buf).expect("Not able to write manpage");
    }
}

fn main() {
    println!("cargo:rerun-if-env-changed=ASSET_DIR");
    println!("cargo:rerun-if-changed=src/cli.rs");

    #[cfg(feature = "assets")]
    assets::generate();
}
