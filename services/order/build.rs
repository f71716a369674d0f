fn main() {
    tonic_build::configure()
        .build_server(true)
        .build_client(false)
        .compile_protos(&["../../proto/order/v1/order.proto"], &["../../proto"])
        .expect("Failed to compile protos");

    println!("cargo:rerun-if-changed=../../proto/order/v1/order.proto");
}
