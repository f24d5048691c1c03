use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;

/// Caller-supplied pagination. `page_size` falls back to a service-specific
/// default, so it stays optional here.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PageRequest {
	pub page: Option<u32>,
	pub page_size: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageBounds {
	pub page: u32,
	pub page_size: u32,
	pub max_page: u32,
	pub offset: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageError {
	ZeroPage,
	ZeroPageSize,
	OutOfRange { page: u32, max_page: u32 },
}

/// Computes the slice bounds for one page over `total` items.
///
/// Callers must handle `total == 0` as their own empty condition before
/// calling; here it simply makes every page out of range. Every paginated
/// path (search, refine, catalogue) goes through this one function.
pub fn bounds(
	req: &PageRequest,
	default_page_size: u32,
	total: usize,
) -> Result<PageBounds, PageError> {
	let page = req.page.unwrap_or(DEFAULT_PAGE);
	let page_size = req.page_size.unwrap_or(default_page_size);

	if page == 0 {
		return Err(PageError::ZeroPage);
	}
	if page_size == 0 {
		return Err(PageError::ZeroPageSize);
	}

	let max_page = (total as u64).div_ceil(page_size as u64).min(u64::from(u32::MAX)) as u32;

	if page > max_page {
		return Err(PageError::OutOfRange { page, max_page });
	}

	Ok(PageBounds {
		page,
		page_size,
		max_page,
		offset: (page as usize - 1) * page_size as usize,
	})
}

pub fn slice<T>(items: &[T], bounds: PageBounds) -> &[T] {
	let start = bounds.offset.min(items.len());
	let end = bounds.offset.saturating_add(bounds.page_size as usize).min(items.len());

	&items[start..end]
}
