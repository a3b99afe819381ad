// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

fn main() -> anyhow::Result<()> {
    memlist::cli::main()
}
