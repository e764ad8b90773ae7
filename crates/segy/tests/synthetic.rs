//! Integration tests on small synthetic SEG-Y files

use seistools_segy::{read_segy, Endian, Error, SampleFormat, SegyReader};

use ndarray::s;
use rstest::rstest;
use std::io::Write;

/// One trace worth of test data
struct Trace {
    inline: i32,
    crossline: i32,
    samples: Vec<[u8; 4]>,
}

/// Build a complete file in memory
fn build_segy(
    endian: Endian,
    format: u16,
    samples_per_trace: u16,
    extended: i16,
    traces: &[Trace],
) -> Vec<u8> {
    let u16b = |v: u16| match endian {
        Endian::Big => v.to_be_bytes(),
        Endian::Little => v.to_le_bytes(),
    };
    let i32b = |v: i32| match endian {
        Endian::Big => v.to_be_bytes(),
        Endian::Little => v.to_le_bytes(),
    };

    let mut text = vec![b' '; 3200];
    text[..20].copy_from_slice(b"C 1 SYNTHETIC SURVEY");

    let mut binary = vec![0u8; 400];
    binary[16..18].copy_from_slice(&u16b(2000));
    binary[20..22].copy_from_slice(&u16b(samples_per_trace));
    binary[24..26].copy_from_slice(&u16b(format));
    binary[300..302].copy_from_slice(&u16b(0x0100));
    binary[304..306].copy_from_slice(&u16b(extended as u16));

    let mut bytes = [text, binary].concat();
    bytes.extend(std::iter::repeat(b' ').take(3200 * extended.max(0) as usize));

    for trace in traces {
        let mut header = vec![0u8; 240];
        header[114..116].copy_from_slice(&u16b(samples_per_trace));
        header[188..192].copy_from_slice(&i32b(trace.inline));
        header[192..196].copy_from_slice(&i32b(trace.crossline));
        bytes.extend(header);
        for s in &trace.samples {
            bytes.extend(&s[..]);
        }
    }

    bytes
}

/// Write bytes to a scratch file that lives as long as the handle
fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

fn ibm(bits: u32) -> [u8; 4] {
    bits.to_be_bytes()
}

#[rstest]
fn ibm_big_endian_cube() {
    // IBM encodings of 1.0, 100.0, -118.625, 0.5
    let values = [0x4110_0000, 0x4264_0000, 0xC276_A000, 0x4080_0000];
    let traces = (0..4)
        .map(|i| Trace {
            inline: 100 + (i / 2),
            crossline: 200 + (i % 2),
            samples: vec![ibm(values[i as usize]), ibm(values[3 - i as usize])],
        })
        .collect::<Vec<Trace>>();

    let file = write_temp(&build_segy(Endian::Big, 1, 2, 0, &traces));
    let segy = read_segy(file.path(), Endian::Big).unwrap();

    assert!(segy.text_header.starts_with("C 1 SYNTHETIC SURVEY"));
    assert_eq!(segy.binary_header.format, SampleFormat::IbmFloat32);
    assert_eq!(segy.binary_header.sample_interval, 2000);
    assert_eq!(segy.trace_count(), 4);
    assert_eq!(segy.samples_per_trace(), 2);

    assert_eq!(segy.traces.row(0).to_vec(), vec![1.0, 0.5]);
    assert_eq!(segy.traces.row(2).to_vec(), vec![-118.625, 100.0]);
    assert_eq!(segy.inlines.to_vec(), vec![100, 100, 101, 101]);
    assert_eq!(segy.crosslines.to_vec(), vec![200, 201, 200, 201]);

    let volume = segy.to_volume().unwrap();
    assert_eq!(volume.shape(), &[2, 2, 2]);
    // inline 101, crossline 200 is the third trace
    assert_eq!(volume.slice(s![.., 0, 1]).to_vec(), vec![-118.625, 100.0]);
}

#[rstest]
fn ieee_little_endian() {
    let traces = vec![
        Trace {
            inline: 1,
            crossline: 1,
            samples: vec![1.25f32.to_le_bytes(), (-3.0f32).to_le_bytes(), 0f32.to_le_bytes()],
        },
        Trace {
            inline: 1,
            crossline: 2,
            samples: vec![7.5f32.to_le_bytes(), 8.0f32.to_le_bytes(), 9.0f32.to_le_bytes()],
        },
    ];

    let file = write_temp(&build_segy(Endian::Little, 5, 3, 0, &traces));

    let mut reader = SegyReader::new();
    reader.set_endian(Endian::Little);
    reader.disable_progress();
    let segy = reader.parse(file.path()).unwrap();

    assert_eq!(segy.traces.row(0).to_vec(), vec![1.25, -3.0, 0.0]);
    assert_eq!(segy.traces.row(1).to_vec(), vec![7.5, 8.0, 9.0]);
    assert_eq!(segy.crosslines.to_vec(), vec![1, 2]);
}

#[rstest]
fn extended_headers_are_skipped() {
    let traces = vec![Trace {
        inline: 5,
        crossline: 6,
        samples: vec![42i32.to_be_bytes()],
    }];

    let file = write_temp(&build_segy(Endian::Big, 2, 1, 2, &traces));
    let segy = read_segy(file.path(), Endian::Big).unwrap();

    assert_eq!(segy.binary_header.extended_headers, 2);
    assert_eq!(segy.traces.row(0).to_vec(), vec![42.0]);
    assert_eq!(segy.inlines.to_vec(), vec![5]);
}

#[rstest]
fn incomplete_trace_block() {
    let traces = vec![Trace {
        inline: 1,
        crossline: 1,
        samples: vec![[0, 0, 0, 0]],
    }];
    let mut bytes = build_segy(Endian::Big, 5, 1, 0, &traces);
    bytes.extend([0u8; 10]);

    let file = write_temp(&bytes);
    let result = read_segy(file.path(), Endian::Big);
    assert!(matches!(
        result,
        Err(Error::IncompleteTraces {
            length: 254,
            trace_size: 244
        })
    ));
}

#[rstest]
#[case(4)]
#[case(6)]
#[case(16)]
fn unsupported_sample_format(#[case] code: u16) {
    let file = write_temp(&build_segy(Endian::Big, code, 1, 0, &[]));
    let result = read_segy(file.path(), Endian::Big);
    assert!(matches!(result, Err(Error::UnsupportedFormat(c)) if c == code));
}

#[rstest]
fn truncated_file() {
    let file = write_temp(&[0x40; 1000]);
    let result = read_segy(file.path(), Endian::Big);
    assert!(matches!(
        result,
        Err(Error::TruncatedHeader {
            expected: 3600,
            found: 1000
        })
    ));
}

#[rstest]
fn missing_file() {
    let result = read_segy("./data/not_a_cube.sgy", Endian::Big);
    assert!(matches!(result, Err(Error::IOError(_))));
}
