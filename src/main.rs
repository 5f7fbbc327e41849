#[tokio::main]
async fn main() {
    cng_booking_backend::run().await;
}
