// Copyright (c) 2026 the stilzip developers
// MIT License (see the LICENSE file in the repository root)

pub(crate) mod consts;
pub(crate) mod date;
pub(crate) mod header;
