use fp_trie::error::Error;
use fp_trie::gml::{self, ColorScheme};
use fp_trie::pattern::read_pattern_file;
use fp_trie::trie::Trie;

use glob::glob;
use kdam::tqdm;
use log::{info, warn};
use std::fs::File;
use std::io::prelude::*;
use std::time::Instant;

use clap::Parser;
#[derive(Parser, Debug)] #[command(author, version, about, long_about = None)]
struct Args {

    //Which task to carry out: compare, consensus, export, sweep
    #[arg(short, long)]
    task: String,

    //Query pattern file (json or yaml)
    #[arg(short, long)]
    input_filename: String,

    //Second pattern file for compare/consensus, or a glob for sweep
    #[arg(short, long)]
    other_filename: Option<String>,

    //Output filename for GML export
    #[arg(short = 'g', long)]
    output_filename: Option<String>,

    //Color scheme for GML export: element or pharmacophore
    #[arg(short, long, default_value = "element")]
    scheme: String,
}

fn main() {

    env_logger::init();

    let args = Args::parse();

    match args.task.as_str() {
        "compare" => compare(&args),
        "consensus" => consensus(&args),
        "export" => export(&args),
        "sweep" => sweep(&args),
        _ => panic!("Unknown task: {}", args.task),
    }
}

fn build_trie(filename: &str) -> Trie {

    let patterns = read_pattern_file(filename)
        .unwrap_or_else(|e| panic!("Can't read pattern file {}: {}", filename, e));

    let mut trie = Trie::new();
    for pattern in tqdm!(patterns.iter()) {
        trie.insert(pattern);
    }
    trie.finalize();

    return trie;
}

fn parse_scheme(scheme: &str) -> ColorScheme {
    match scheme {
        "element" => ColorScheme::Element,
        "pharmacophore" => ColorScheme::Pharmacophore,
        _ => panic!("Unknown color scheme: {}", scheme),
    }
}

fn compare(args: &Args) {

    let other_filename = args.other_filename.as_ref().expect("compare needs --other-filename");

    let trie1 = build_trie(&args.input_filename);
    let trie2 = build_trie(other_filename);

    println!("features:      {} / {}", trie1.feature_node_count().unwrap(), trie2.feature_node_count().unwrap());
    println!("total counts:  {} / {}", trie1.total_feature_count().unwrap(), trie2.total_feature_count().unwrap());

    println!("tanimoto:      {}", trie1.similarity_tanimoto(&trie2).unwrap());
    println!("min:           {}", trie1.similarity_min(&trie2).unwrap());
    println!("spectrum:      {}", trie1.similarity_spectrum(&trie2).unwrap());

    match trie1.similarity_spectrum_weighted(&trie2) {
        Ok(value) => println!("weighted:      {}", value),
        Err(Error::MissingWeight) => warn!("skipping weighted spectrum, some matched features carry no weight"),
        Err(e) => panic!("{}", e),
    }

    match trie1.percent_match(&trie2) {
        Ok(value) => println!("percent match: {}", value),
        Err(Error::ZeroDenominator) => warn!("skipping percent match, one trie has no features"),
        Err(e) => panic!("{}", e),
    }
}

fn consensus(args: &Args) {

    let other_filename = args.other_filename.as_ref().expect("consensus needs --other-filename");

    let trie1 = build_trie(&args.input_filename);
    let trie2 = build_trie(other_filename);

    let mut consensus = trie1.consensus(&trie2);
    consensus.finalize();

    println!("consensus features:    {}", consensus.feature_node_count().unwrap());
    println!("consensus total count: {}", consensus.total_feature_count().unwrap());
    println!("consensus nodes:       {}", consensus.total_node_count().unwrap());

    if let Some(output_filename) = &args.output_filename {
        write_gml(&consensus, output_filename, parse_scheme(&args.scheme));
    }
}

fn export(args: &Args) {

    let output_filename = args.output_filename.as_ref().expect("export needs --output-filename");

    let trie = build_trie(&args.input_filename);
    write_gml(&trie, output_filename, parse_scheme(&args.scheme));
}

fn write_gml(trie: &Trie, filename: &str, scheme: ColorScheme) {

    let text = gml::export(trie, scheme);

    let mut file = File::create(filename)
        .unwrap_or_else(|e| panic!("Can't create {}: {}", filename, e));
    file.write_all(text.as_bytes()).unwrap();

    info!("wrote {} bytes of GML to {}", text.len(), filename);
}

fn sweep(args: &Args) {

    let pattern = args.other_filename.as_ref().expect("sweep needs --other-filename as a glob");

    let query = build_trie(&args.input_filename);

    for entry in glob(pattern).expect("Glob failed") {

        let filename = entry.unwrap().into_os_string().into_string().unwrap();
        let reference = build_trie(&filename);

        let start = Instant::now();
        let tanimoto = query.similarity_tanimoto(&reference).unwrap();
        let spectrum = query.similarity_spectrum(&reference).unwrap();
        let duration = start.elapsed();

        info!("{}: tanimoto {} spectrum {} ({}s)", &filename, tanimoto, spectrum, duration.as_secs_f64());
        println!("{}\t{}\t{}", filename, tanimoto, spectrum);
    }
}
