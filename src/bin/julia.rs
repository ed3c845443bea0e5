// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate failure;
extern crate image;
extern crate julia_orbits;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use image::png::PNGEncoder;
use image::ColorType;
use julia_orbits::presets;
use julia_orbits::{render_frame_threaded, Frame, RenderParameters, Seed, SeedMode};
use num::Complex;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_size(s: &str) -> Result<(), String> {
    match parse_pair::<u16>(s, 'x') {
        Some((w, h)) if w > 0 && h > 0 => Ok(()),
        Some(_) => Err("Output image size must be positive".to_string()),
        None => Err("Could not parse output image size".to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_zoom(s: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(z) if z > 0.0 && z.is_finite() => Ok(()),
        Ok(_) => Err("Zoom must be a positive number".to_string()),
        Err(_) => Err("Could not parse zoom".to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const CONSTANT: &str = "constant";
const MODE: &str = "mode";
const SEED: &str = "seed";
const POLAR: &str = "polar";
const ITERATIONS: &str = "iterations";
const ZOOM: &str = "zoom";
const PRESET: &str = "preset";
const NO_FIELD: &str = "no-field";
const NO_ORBIT: &str = "no-orbit";
const THREADS: &str = "threads";
const LIST_PRESETS: &str = "list-presets";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("julia")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Julia set and orbit renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required_unless(LIST_PRESETS)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output PNG file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("600x600")
                .validator(|s| validate_size(&s))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(CONSTANT)
                .required(false)
                .long(CONSTANT)
                .short("c")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("2,0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse the constant c"))
                .help("The constant c of z^2 + c, as re,im"),
        )
        .arg(
            Arg::with_name(MODE)
                .required(false)
                .long(MODE)
                .short("m")
                .takes_value(true)
                .possible_values(&["rectangular", "polar"])
                .default_value("rectangular")
                .help("Which form of the seed point to use"),
        )
        .arg(
            Arg::with_name(SEED)
                .required(false)
                .long(SEED)
                .short("z")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0,0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse the seed point"))
                .help("Seed point of the orbit in rectangular form, as re,im"),
        )
        .arg(
            Arg::with_name(POLAR)
                .required(false)
                .long(POLAR)
                .short("p")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0,0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse the polar seed"))
                .help("Seed point of the orbit in polar form, as radius,degrees"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("100")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        200_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 200000",
                    )
                })
                .help("Maximum number of iterations per pixel and per orbit"),
        )
        .arg(
            Arg::with_name(ZOOM)
                .required(false)
                .long(ZOOM)
                .takes_value(true)
                .default_value("1")
                .validator(|s| validate_zoom(&s))
                .help("Zoom factor; 1 shows [-2, 2] on both axes"),
        )
        .arg(
            Arg::with_name(PRESET)
                .required(false)
                .long(PRESET)
                .short("P")
                .takes_value(true)
                .validator(|s| presets::find(&s).map(|_| ()).map_err(|e| e.to_string()))
                .help("Named preset; replaces the constant, seed, iterations and zoom"),
        )
        .arg(
            Arg::with_name(NO_FIELD)
                .long(NO_FIELD)
                .help("Leave out the Julia set"),
        )
        .arg(
            Arg::with_name(NO_ORBIT)
                .long(NO_ORBIT)
                .help("Leave out the orbit"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in solver"),
        )
        .arg(
            Arg::with_name(LIST_PRESETS)
                .long(LIST_PRESETS)
                .help("Print the names of the presets and exit"),
        )
        .get_matches()
}

fn value<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, failure::Error> {
    matches
        .value_of(name)
        .ok_or_else(|| format_err!("No value for --{}", name))
}

fn complex_arg(matches: &ArgMatches, name: &str) -> Result<Complex<f64>, failure::Error> {
    parse_complex(value(matches, name)?).ok_or_else(|| format_err!("Could not parse --{}", name))
}

fn parameters(matches: &ArgMatches) -> Result<RenderParameters, failure::Error> {
    let (width, height) = parse_pair::<u16>(value(matches, SIZE)?, 'x')
        .ok_or_else(|| format_err!("Could not parse output image size"))?;
    let (width, height) = (usize::from(width), usize::from(height));

    let params = match matches.value_of(PRESET) {
        Some(name) => {
            let preset = presets::find(name)?;
            info!("using preset '{}'", preset.name);
            preset.parameters(width, height)?
        }
        None => {
            let mode = match value(matches, MODE)? {
                "polar" => SeedMode::Polar,
                _ => SeedMode::Rectangular,
            };
            let (radius, degrees) = parse_pair::<f64>(value(matches, POLAR)?, ',')
                .ok_or_else(|| format_err!("Could not parse the polar seed"))?;
            let seed = Seed::select(mode, complex_arg(matches, SEED)?, radius, degrees);
            let iterations = usize::from_str(value(matches, ITERATIONS)?)?;
            let zoom = f64::from_str(value(matches, ZOOM)?)?;
            RenderParameters::new(complex_arg(matches, CONSTANT)?, seed, iterations, zoom, width, height)?
        }
    };

    Ok(params
        .with_field(!matches.is_present(NO_FIELD))
        .with_orbit(!matches.is_present(NO_ORBIT)))
}

fn write_image(outfile: &str, frame: &Frame) -> Result<(), failure::Error> {
    let path = Path::new(outfile);
    let output = File::create(&path)?;
    let encoder = PNGEncoder::new(output);
    encoder.encode(
        &frame.pixels,
        frame.width as u32,
        frame.height as u32,
        ColorType::RGBA(8),
    )?;
    info!("wrote {}x{} frame to {}", frame.width, frame.height, path.display());
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    let params = parameters(matches)?;
    let threads = usize::from_str(value(matches, THREADS)?)?;
    debug!("{:?}", params);
    let frame = render_frame_threaded(&params, threads);
    write_image(value(matches, OUTPUT)?, &frame)
}

fn main() {
    env_logger::init();
    let matches = args();

    if matches.is_present(LIST_PRESETS) {
        for preset in presets::presets() {
            println!("{}", preset.name);
        }
        return;
    }

    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
