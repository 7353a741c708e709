use part_inspector::image::RgbBufferU8;

/// Fixture-gray frame with one darker axis-aligned part.
pub fn block_frame(
    w: usize,
    h: usize,
    x0: usize,
    y0: usize,
    bw: usize,
    bh: usize,
) -> RgbBufferU8 {
    let mut frame = RgbBufferU8::filled(w, h, [220, 220, 220]);
    frame.fill_rect(x0, y0, x0 + bw, y0 + bh, [40, 40, 40]);
    frame
}

/// Featureless fixture-gray frame.
pub fn blank_frame(w: usize, h: usize) -> RgbBufferU8 {
    RgbBufferU8::filled(w, h, [220, 220, 220])
}

/// Panel-gray frame with darker blemish patches `(x, y, w, h)`.
pub fn blemished_frame(
    w: usize,
    h: usize,
    patches: &[(usize, usize, usize, usize)],
) -> RgbBufferU8 {
    let mut frame = RgbBufferU8::filled(w, h, [200, 200, 200]);
    for &(x, y, pw, ph) in patches {
        frame.fill_rect(x, y, x + pw, y + ph, [80, 80, 80]);
    }
    frame
}
