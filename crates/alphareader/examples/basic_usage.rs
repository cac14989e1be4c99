// AlphaReader - streaming, delimiter-configurable record reader/writer
//
// Copyright (c) 2026 AlphaReader contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Basic usage: write a small legacy-format file, scan it back raw, then
//! scan a numeric file through a typed transform chain.
//!
//! Run with: `cargo run --example basic_usage`

use alphareader::{
    scan_path, transforms, write_records_to_path, RecordScanner, ScanConfig, Transform, Value,
};
use std::error::Error;
use std::io::Cursor;

fn main() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("orders.dat");

    // The default layout: fields joined by '«', records closed by '¬',
    // bytes encoded as cp1252.
    let records = vec![
        vec![Value::from("1001"), Value::from("café grande"), Value::from("12")],
        vec![Value::from("1002"), Value::from("thé vert"), Value::from("7")],
        vec![Value::from("1003"), Value::from("moka"), Value::from("31")],
    ];
    let written = write_records_to_path(&path, &records)?;
    println!("wrote {} bytes to {}", written, path.display());

    println!("\nraw scan:");
    let mut total = 0i64;
    for record in scan_path(&path)? {
        let record = record?;
        if let Some(qty) = record.last().and_then(Value::as_str) {
            total += qty.parse::<i64>()?;
        }
        let fields: Vec<_> = record.iter().map(ToString::to_string).collect();
        println!("  {:?}", fields);
    }
    println!("total quantity: {}", total);

    // Uniformly numeric input can be typed during the scan itself.
    let chain = Transform::chain(vec![transforms::trim(), transforms::parse_int()])?;
    let config = ScanConfig {
        delimiter: ',',
        terminator: '\n',
        encoding: "utf-8".to_string(),
        ..Default::default()
    };
    let scanner = RecordScanner::with_config(Cursor::new(" 1, 2, 3\n40,50,60\n"), config)?
        .with_transform(chain);

    println!("\ntyped scan:");
    for record in scanner {
        let record = record?;
        let sum: i64 = record.iter().filter_map(Value::as_int).sum();
        println!("  {:?} -> sum {}", record, sum);
    }

    Ok(())
}
