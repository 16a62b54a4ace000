// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

vidl::commands! {
    source = "
        // @rpc
        void Ping(uint32_t seq);

        // VIDL_GENERATE
        void Ignored();
    ",
    marker = "// @rpc",
    prefix = "Rpc"
}

struct Pong(u32);

impl RpcHandler for Pong {
    fn handle_ping(&mut self, cmd: &RpcPing) {
        self.0 = cmd.seq;
    }
}

fn main() {
    let mut pong = Pong(0);
    pong.handle(&RpcCommand::from(RpcPing::new(9)));
    assert_eq!(pong.0, 9);
    assert_eq!(RpcCommand::NAMES, ["Ping"]);
}
