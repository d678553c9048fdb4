use ltp305_i2c::{MatrixDisplay, ADDRESS_DEFAULT};

fn main() {
    let config = mcp2221::Config::default();
    let i2c = mcp2221::Handle::open_first(&config).unwrap();

    let mut display = MatrixDisplay::new(i2c, ADDRESS_DEFAULT);

    println!("Showing \"Hi\".");
    display.write_text("Hi").unwrap();
    display.set_decimal(Some(true), Some(true));
    display.show().unwrap();

    println!("Sleeping for 10 seconds...");
    std::thread::sleep(std::time::Duration::from_secs(10));

    println!("Clearing display.");
    display.clear();
    display.show().unwrap();
}
