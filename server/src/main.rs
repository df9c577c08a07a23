use fp_trie::pattern::{read_pattern_file, PatternSequence};
use fp_trie::trie::Trie;

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Request, Response};
use hyper::server::Server;

use clap::Parser;
#[derive(Parser, Debug)] #[command(author, version, about, long_about = None)]
struct Args {

    //Reference pattern file loaded into the trie at startup
    #[arg(short, long)]
    reference_filename: String,

    //Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

fn text_response(message: String) -> Response<Body> {
    return Response::new(Body::from(message.as_bytes().to_vec()));
}

async fn get_similarity(req: Request<Body>, trie: Arc<Mutex<Trie>>) -> Result<Response<Body>, Infallible> {

    let path = req.uri().path().to_string();

    let mut items = path.split("/");

    let endpoint = items.nth(1).unwrap_or("");
    if endpoint != "similarity" {
        return Ok(text_response("endpoint not recognized".to_string()));
    }

    let measure = match items.next() {
        Some(m) => m.to_string(),
        None => return Ok(text_response("no measure given".to_string())),
    };

    let body: bytes::Bytes = match hyper::body::to_bytes(req.into_body()).await {
        Ok(b) => b,
        Err(_) => return Ok(text_response("can't read request body".to_string())),
    };

    let patterns: Vec<PatternSequence> = match serde_json::from_slice(&body) {
        Ok(p) => p,
        Err(_) => return Ok(text_response("invalid pattern body".to_string())),
    };

    let mut query = Trie::new();
    for pattern in patterns.iter() {
        query.insert(pattern);
    }
    query.finalize();

    let reference = trie.lock().unwrap();

    let value = match measure.as_str() {
        "tanimoto" => reference.similarity_tanimoto(&query),
        "min" => reference.similarity_min(&query).map(|v| v as f64),
        "spectrum" => reference.similarity_spectrum(&query).map(|v| v as f64),
        "spectrum_weighted" => reference.similarity_spectrum_weighted(&query),
        "percent_match" => reference.percent_match(&query),
        _ => return Ok(text_response("measure not recognized".to_string())),
    };

    let response = match value {
        Ok(v) => {
            let reply = serde_json::json!({
                "measure": measure,
                "query_features": query.feature_node_count().unwrap_or(0),
                "value": v,
            });
            text_response(reply.to_string())
        },
        Err(e) => text_response(format!("{}", e)),
    };

    return Ok(response);
}

#[tokio::main]
async fn main() {

    let args = Args::parse();

    let patterns = read_pattern_file(&args.reference_filename)
        .unwrap_or_else(|e| panic!("Can't read reference pattern file: {}", e));

    let mut trie = Trie::new();
    for pattern in patterns.iter() {
        trie.insert(pattern);
    }
    trie.finalize();

    println!("reference trie: {} features, {} nodes",
        trie.feature_node_count().unwrap(),
        trie.total_node_count().unwrap());

    let trie = Arc::new(Mutex::new(trie));

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));

    let make_svc = make_service_fn(move |_conn| {
        let trie = trie.clone();
        async move {
            Ok::<_, Infallible>(service_fn(move |req| get_similarity(req, trie.clone())))
        }
    });

    let server = Server::bind(&addr).serve(make_svc);

    println!("listening on {}", addr);

    if let Err(e) = server.await {
        eprintln!("server error: {}", e);
    }
}
