// Thin delegating binary.
//
// The actual server assembly lives in the `docket-server` crate.
#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    docket_server::run().await
}
