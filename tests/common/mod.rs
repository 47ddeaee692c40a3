use assert_cmd::Command;

pub fn dictum_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dictum").unwrap();
    cmd.env_remove("DICTUM_ROOT");
    cmd.env_remove("DICTUM_SPEECH");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}
