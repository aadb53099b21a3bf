// Copyright 2024-2025 Irreducible Inc.

use assert_matches::assert_matches;
use hashkit_codec::text::{Base64Alphabet, to_base64, to_hex};
use hashkit_hash::{
	DigestOptions, DigestOutput, DigestRequest, Digester, Error, Format, Hasher, Md5, Message,
	Order, Sha1, Sha256, Tiger192, construct, vectors::test_vector,
};
use hex_literal::hex;
use lazy_static::lazy_static;
use proptest::prelude::*;

lazy_static! {
	static ref DIGESTERS: Vec<Box<dyn Digester>> = ["MD5", "SHA1", "SHA256", "TIGER192"]
		.into_iter()
		.map(|name| construct(name).unwrap())
		.collect();
}

fn bytes(output: DigestOutput) -> Vec<u8> {
	match output {
		DigestOutput::Bytes(bytes) => bytes,
		DigestOutput::Text(text) => panic!("expected bytes, got {text}"),
	}
}

fn byteseq(order: Order) -> DigestOptions {
	DigestOptions::new()
		.with_format(Format::ByteSeq)
		.with_order(order)
}

#[test]
fn test_empty_input() {
	hashkit_utils::tracing::init_tracing();

	// Defaults: hex output, per-algorithm order
	for (name, expected) in [
		("MD5", "d41d8cd98f00b204e9800998ecf8427e"),
		("SHA1", "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
		("SHA256", "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
		("TIGER192", "3293ac630c13f0245f92bbb1766e16167a4e58492dde73f3"),
	] {
		let digester = construct(name).unwrap();
		let output = digester.digest_with(&Message::from(""), DigestOptions::default());
		assert_eq!(output.as_text(), Some(expected), "{name}");
	}
}

#[test]
fn test_base64_formats() {
	let md5 = Hasher::<Md5>::new().unwrap();
	let message = Message::from("ABCDEFGHIJ");
	let base64 = md5.digest_with(&message, DigestOptions::new().with_format(Format::Base64));
	assert_eq!(base64.as_text(), Some("6GQQ+i1uJjT9isX0s6/n8w=="));
	let safe = md5.digest_with(&message, DigestOptions::new().with_format(Format::Base64Safe));
	assert_eq!(safe.as_text(), Some("6GQQ*i1uJjT9isX0s6-n8w"));
}

#[test]
fn test_byteseq_matches_hex() {
	let sha256 = Hasher::<Sha256>::new().unwrap();
	let message = Message::from("The quick brown fox jumps over the lazy dog");
	let raw = bytes(sha256.digest_with(&message, DigestOptions::new().with_format(Format::ByteSeq)));
	assert_eq!(raw, hex!("d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"));
	let text = sha256.digest_with(&message, DigestOptions::default());
	assert_eq!(text.as_text(), Some(to_hex(&raw).as_str()));
}

#[test]
fn test_orders_reverse_each_word() {
	let sha1 = Hasher::<Sha1>::new().unwrap();
	let message = Message::from("abc");
	let big = bytes(sha1.digest_with(&message, byteseq(Order::Big)));
	let little = bytes(sha1.digest_with(&message, byteseq(Order::Little)));
	assert_eq!(big, hex!("a9993e364706816aba3e25717850c26c9cd0d89d"));
	for (big_word, little_word) in big.chunks(4).zip(little.chunks(4)) {
		let reversed = little_word.iter().rev().copied().collect::<Vec<_>>();
		assert_eq!(big_word, reversed.as_slice());
	}
}

#[test]
fn test_tiger_orders() {
	let tiger = Hasher::<Tiger192>::new().unwrap();
	let message = Message::from("");
	let little = bytes(tiger.digest_with(&message, byteseq(Order::Little)));
	let big = bytes(tiger.digest_with(&message, byteseq(Order::Big)));
	assert_eq!(little, hex!("3293ac630c13f0245f92bbb1766e16167a4e58492dde73f3"));
	assert_eq!(big, hex!("24f0130c63ac933216166e76b1bb925ff373de2d49584e7a"));
	// Each 64-bit accumulator is byte-reversed between the two orders
	for (big_word, little_word) in big.chunks(8).zip(little.chunks(8)) {
		let reversed = little_word.iter().rev().copied().collect::<Vec<_>>();
		assert_eq!(big_word, reversed.as_slice());
	}
}

#[test]
fn test_tiger_multi_block() {
	let tiger = Hasher::<Tiger192>::new().unwrap();
	let message = Message::from(
		"Tiger - A Fast New Hash Function, by Ross Anderson and Eli Biham, proceedings of Fast Software Encryption 3, Cambridge.",
	);
	let big = tiger.digest_with(&message, DigestOptions::new().with_order(Order::Big));
	assert_eq!(big.as_text(), Some("ebf591d5afa655ce7f22894ff87f54ac89c811b6b0da3193"));
}

#[test]
fn test_lenient_options_fall_back_to_defaults() {
	let md5 = Hasher::<Md5>::new().unwrap();
	let options = DigestOptions::lenient(Some("base32"), Some("sideways"));
	let output = md5.digest_with(&Message::from(""), options);
	assert_eq!(output.as_text(), Some("d41d8cd98f00b204e9800998ecf8427e"));
}

#[test]
fn test_string_messages_are_clipped() {
	let md5 = Hasher::<Md5>::new().unwrap();
	let units = test_vector("digest-span-utf16").unwrap();
	let implicit = md5.digest_with(&Message::from(units), DigestOptions::default());
	let clipped = units.iter().map(|&unit| unit as u8).collect::<Vec<_>>();
	let explicit = md5.digest(clipped);
	assert_eq!(implicit, explicit);
	assert_eq!(implicit.as_text(), Some("d086073d4a685c6d9a10edf684d591bc"));
}

#[test]
fn test_large_zero_input_is_deterministic() {
	let sha1 = Hasher::<Sha1>::new().unwrap();
	let zeros = vec![0u8; 1024];
	let first = sha1.digest(zeros.as_slice());
	let second = sha1.digest(zeros.as_slice());
	assert_eq!(first, second);
	assert_eq!(first.as_text(), Some("60cacbf3d72e1e7834203da608037b1bf83b40e8"));
}

#[test]
#[cfg(not(feature = "bail_panic"))]
fn test_request_errors() {
	let tiger = construct("tiger").unwrap();
	assert_matches!(tiger.digest_request(DigestRequest::default()), Err(Error::Argument(_)));
	let output = tiger
		.digest_request(DigestRequest::new("Tiger").with_options(byteseq(Order::Big)))
		.unwrap();
	assert_eq!(
		output.as_bytes(),
		Some(hex!("9f00f599072300dd276abb38c8eb6dec37790c116f9d2bdf").as_slice())
	);
}

proptest! {
	#[test]
	fn test_text_formats_reencode_byteseq(
		input in prop::collection::vec(any::<u8>(), 0..=300),
		big in any::<bool>(),
	) {
		let order = if big { Order::Big } else { Order::Little };
		let message = Message::from(input.as_slice());
		for digester in DIGESTERS.iter() {
			let with_format = |format| {
				let options = DigestOptions::new().with_format(format).with_order(order);
				digester.digest_with(&message, options)
			};
			let raw = bytes(with_format(Format::ByteSeq));
			let hex = with_format(Format::Hex);
			let expected_hex = to_hex(&raw);
			prop_assert_eq!(hex.as_text(), Some(expected_hex.as_str()));
			let base64 = with_format(Format::Base64);
			let expected_base64 = to_base64(&raw, Base64Alphabet::Standard);
			prop_assert_eq!(base64.as_text(), Some(expected_base64.as_str()));
			let base64_safe = with_format(Format::Base64Safe);
			let expected_base64_safe = to_base64(&raw, Base64Alphabet::UrlSafe);
			prop_assert_eq!(base64_safe.as_text(), Some(expected_base64_safe.as_str()));
		}
	}
}
