// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

vidl::commands! {
    source = r#"
        // VIDL_GENERATE
        void CmdA(int x);

        // VIDL_GENERATE
        void CmdB(float y);

        // VIDL_GENERATE
        void CmdC();
    "#
}

#[derive(Default)]
struct Recorder {
    seen:   Vec<&'static str>,
    last_x: i32
}

impl VidlHandler for Recorder {
    fn handle_cmd_a(&mut self, cmd: &VidlCmdA) {
        self.seen.push(VidlCmdA::NAME);
        self.last_x = cmd.x;
    }

    fn handle_cmd_c(&mut self, _cmd: &VidlCmdC) {
        self.seen.push(VidlCmdC::NAME);
    }
}

fn main() {
    let commands: Vec<VidlCommand> = vec![
        VidlCmdA::new(7).into(),
        VidlCmdB::new(1.5).into(),
        VidlCmdC::new().into(),
    ];

    let mut recorder = Recorder::default();
    for cmd in &commands {
        recorder.handle(cmd);
    }
    assert_eq!(recorder.seen, ["CmdA", "CmdC"]);
    assert_eq!(recorder.last_x, 7);

    assert_eq!(commands[0].magic(), VidlCmdA::MAGIC);
    assert_eq!(commands[1].name(), "CmdB");
    assert_eq!(VidlCmdA::MAGIC, vidl::magic_for("CmdA"));
    assert_ne!(VidlCmdA::MAGIC, VidlCmdB::MAGIC);
    assert_ne!(VidlCmdB::MAGIC, VidlCmdC::MAGIC);

    assert_eq!(VidlCommand::MAGICS.len(), 3);
    assert_eq!(VidlCommand::name_for_magic(VidlCmdB::MAGIC), Some("CmdB"));
    assert_eq!(VidlCommand::name_for_magic(0), None);
    assert_eq!(VidlCmdC::default(), VidlCmdC::new());
}
