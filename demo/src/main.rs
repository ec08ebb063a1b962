use std::io::Write;

use ntbs::{Ntbs, cat, cut};

const HELLO_WORLD: Ntbs<14> = cat!(cat!([b',', b' ']; b"Hello\0", b"world\0"), b'!');
const HELLO_COMMA: Ntbs<7> = cut!(HELLO_WORLD, 0, 6);
const WORLD_EXCLAIM: Ntbs<7> = cut!(HELLO_WORLD, -7);

const _: () = assert!(HELLO_WORLD.equals(b"Hello, world!\0"));
const _: () = assert!(HELLO_COMMA.equals(b"Hello,\0"));
const _: () = assert!(WORLD_EXCLAIM.equals(b"world!\0"));
const _: () = assert!(HELLO_WORLD.equals(&cat!([b' ']; HELLO_COMMA, WORLD_EXCLAIM)));

fn main() -> anyhow::Result<()> {
    let greeting = cat!([b' ']; HELLO_COMMA, WORLD_EXCLAIM);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(greeting.as_c_str()?.to_bytes())?;
    stdout.write_all(b"\n")?;

    Ok(())
}
