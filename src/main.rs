// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::Parser;

use rficat::RfiCat;

fn main() {
    // All the heavy lifting is done inside `run`; this just surfaces any
    // error on the terminal with a non-zero exit code.
    if let Err(e) = RfiCat::parse().run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
