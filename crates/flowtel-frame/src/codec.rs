use bytes::{Buf, BufMut, BytesMut};

use crate::error::{FrameError, Result};
use crate::record::FlowRecord;

/// Size of the fixed portion of a frame: every field before the trailing
/// sample array.
pub const HEADER_SIZE: usize = 69;

/// Decode one raw frame into a [`FlowRecord`].
///
/// Wire layout (all little-endian):
/// ```text
/// ┌─────────────────────────────────┬──────────────────────────┐
/// │ Fixed fields (69 bytes)         │ samples (i16 × n)        │
/// │ tof, amp, pwr, vis, reyn, …     │ n = (len − 69) / 2       │
/// │ ending in array_length (u16)    │                          │
/// └─────────────────────────────────┴──────────────────────────┘
/// ```
///
/// The declared `array_length` is known to be unreliable on the device and
/// is retained as reported telemetry only. The sample count always derives
/// from the bytes actually present; a dangling odd byte at the tail is
/// discarded rather than read as half a sample.
pub fn decode_record(buf: &[u8]) -> Result<FlowRecord> {
    if buf.len() < HEADER_SIZE {
        return Err(FrameError::TruncatedHeader { len: buf.len() });
    }

    let mut cursor = buf;
    let tof_up_e12 = cursor.get_u32_le();
    let tof_dn_e12 = cursor.get_u32_le();
    let amp_up = cursor.get_i16_le();
    let amp_dn = cursor.get_i16_le();
    let pwr_up = cursor.get_u8();
    let pwr_dn = cursor.get_u8();
    let pwr_min = cursor.get_u8();
    let pwr_max = cursor.get_u8();
    let vis_e14 = cursor.get_u64_le();
    let reyn_e6 = cursor.get_u64_le();
    let kf_e6 = cursor.get_u32_le();
    let ucv_e6 = cursor.get_i32_le();
    let sos_e6 = cursor.get_u32_le();
    let flow_e6 = cursor.get_i32_le();
    let flow_calculated = cursor.get_f32_le();
    let status_wm = cursor.get_u32_le();
    let temperature_e1 = cursor.get_i16_le();
    let fhl = cursor.get_u8();
    let volume = cursor.get_f64_le();
    let array_length = cursor.get_u16_le();

    let sample_count = (buf.len() - HEADER_SIZE) / 2;
    let mut samples = Vec::with_capacity(sample_count);
    for _ in 0..sample_count {
        samples.push(cursor.get_i16_le());
    }

    Ok(FlowRecord {
        tof_up_e12,
        tof_dn_e12,
        amp_up,
        amp_dn,
        pwr_up,
        pwr_dn,
        pwr_min,
        pwr_max,
        vis_e14,
        reyn_e6,
        kf_e6,
        ucv_e6,
        sos_e6,
        flow_e6,
        flow_calculated,
        status_wm,
        temperature_e1,
        fhl,
        volume,
        array_length,
        samples,
    })
}

/// Encode a record into the wire format.
///
/// `array_length` is written verbatim, so an encoded record may declare a
/// count that disagrees with `samples.len()` — exactly what affected
/// firmware revisions produce. Useful for building test captures.
pub fn encode_record(record: &FlowRecord, dst: &mut BytesMut) {
    dst.reserve(HEADER_SIZE + 2 * record.samples.len());
    dst.put_u32_le(record.tof_up_e12);
    dst.put_u32_le(record.tof_dn_e12);
    dst.put_i16_le(record.amp_up);
    dst.put_i16_le(record.amp_dn);
    dst.put_u8(record.pwr_up);
    dst.put_u8(record.pwr_dn);
    dst.put_u8(record.pwr_min);
    dst.put_u8(record.pwr_max);
    dst.put_u64_le(record.vis_e14);
    dst.put_u64_le(record.reyn_e6);
    dst.put_u32_le(record.kf_e6);
    dst.put_i32_le(record.ucv_e6);
    dst.put_u32_le(record.sos_e6);
    dst.put_i32_le(record.flow_e6);
    dst.put_f32_le(record.flow_calculated);
    dst.put_u32_le(record.status_wm);
    dst.put_i16_le(record.temperature_e1);
    dst.put_u8(record.fhl);
    dst.put_f64_le(record.volume);
    dst.put_u16_le(record.array_length);
    for &sample in &record.samples {
        dst.put_i16_le(sample);
    }
}
