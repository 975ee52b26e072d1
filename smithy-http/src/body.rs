/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use std::error::Error;
use std::pin::Pin;
use std::task::{Context, Poll};

type BodyError = Box<dyn Error + Send + Sync>;

/// SdkBody type
///
/// This is the Body used for dispatching all HTTP Requests. Request bodies are always fully
/// serialized in memory before dispatch, so the body knows its length and can be cloned.
#[derive(Debug, Clone)]
pub enum SdkBody {
    Once(Option<Bytes>),
}

impl SdkBody {
    pub fn empty() -> Self {
        SdkBody::Once(None)
    }

    fn poll_inner(&mut self) -> Poll<Option<Result<Bytes, BodyError>>> {
        match self {
            SdkBody::Once(ref mut opt) => {
                let data = opt.take();
                match data {
                    Some(bytes) => Poll::Ready(Some(Ok(bytes))),
                    None => Poll::Ready(None),
                }
            }
        }
    }

    /// Returns the contents of the body if they are held in memory.
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            SdkBody::Once(Some(bytes)) => Some(bytes.as_ref()),
            SdkBody::Once(None) => Some(&[][..]),
        }
    }

    pub fn content_length(&self) -> u64 {
        match self {
            SdkBody::Once(Some(bytes)) => bytes.len() as u64,
            SdkBody::Once(None) => 0,
        }
    }

    pub fn try_clone(&self) -> Option<Self> {
        Some(self.clone())
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::Once(Some(Bytes::copy_from_slice(s.as_bytes())))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        SdkBody::from(s.into_bytes())
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody::Once(Some(bytes))
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> SdkBody {
        Self::from(Bytes::from(data))
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BodyError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        self.poll_inner()
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn is_end_stream(&self) -> bool {
        matches!(self, SdkBody::Once(None))
    }

    fn size_hint(&self) -> http_body::SizeHint {
        http_body::SizeHint::with_exact(self.content_length())
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use http_body::Body;
    use std::pin::Pin;
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn noop_waker() -> Waker {
        fn clone(_: *const ()) -> RawWaker {
            RawWaker::new(std::ptr::null(), &VTABLE)
        }
        fn noop(_: *const ()) {}
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);
        unsafe { Waker::from_raw(RawWaker::new(std::ptr::null(), &VTABLE)) }
    }

    #[test]
    fn length_and_contents() {
        let body = SdkBody::from("{\"Enabled\":true}");
        assert_eq!(body.content_length(), 16);
        assert_eq!(body.bytes(), Some("{\"Enabled\":true}".as_bytes()));
        assert_eq!(body.size_hint().exact(), Some(16));

        let empty = SdkBody::empty();
        assert_eq!(empty.content_length(), 0);
        assert_eq!(empty.bytes(), Some(&b""[..]));
        assert!(empty.is_end_stream());
    }

    #[test]
    fn polls_once() {
        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);
        let mut body = SdkBody::from("hello");
        let clone = body.try_clone().expect("in-memory bodies are cloneable");
        match Pin::new(&mut body).poll_data(&mut cx) {
            Poll::Ready(Some(Ok(data))) => assert_eq!(&data[..], b"hello"),
            _ => panic!("expected the body contents"),
        }
        assert!(matches!(
            Pin::new(&mut body).poll_data(&mut cx),
            Poll::Ready(None)
        ));
        assert_eq!(clone.bytes(), Some(&b"hello"[..]));
    }
}
